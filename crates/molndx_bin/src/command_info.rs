use anyhow::{Context, Result};
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use log::info;
use molndx::prelude::*;

pub(super) fn command_info(file: &str) -> Result<()> {
    let ndx = NdxFile::open(file).with_context(|| format!("reading index file '{file}'"))?;
    info!(
        "{} groups ({} headers) in '{file}'",
        ndx.len(),
        ndx.group_order().len()
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Group", "Atoms", "First", "Last", "Headers"]);

    for (name, indices) in ndx.iter() {
        let headers = ndx.group_order().iter().filter(|n| *n == name).count();
        table.add_row(vec![
            name.to_owned(),
            indices.len().to_string(),
            indices.first().map(|i| i.to_string()).unwrap_or_default(),
            indices.last().map(|i| i.to_string()).unwrap_or_default(),
            headers.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
