use anyhow::{Context, Result};
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use log::info;
use molndx::prelude::*;

pub(super) fn command_preview(file: &str, config: Option<&str>) -> Result<()> {
    let opts = match config {
        Some(c) => {
            HostOptions::from_file(c).with_context(|| format!("loading host options '{c}'"))?
        }
        None => HostOptions::default(),
    };
    info!("Chunk size: {}", opts.chunk_size);

    let ndx = NdxFile::open(file).with_context(|| format!("reading index file '{file}'"))?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Group", "Selection", "Atoms", "Host calls"]);

    let mut total = 0;
    for (name, indices) in ndx.iter() {
        let calls = host_calls_for(indices.len(), &opts);
        total += calls;
        let sel = if indices.is_empty() {
            "(skipped)".to_owned()
        } else {
            selection_name(name)
        };
        table.add_row(vec![
            name.to_owned(),
            sel,
            indices.len().to_string(),
            calls.to_string(),
        ]);
    }
    println!("{table}");
    info!("{total} host calls in total");
    Ok(())
}
