use anyhow::{bail, Context, Result};
use log::{info, warn};
use molndx::prelude::*;
use std::{fs::File, io::BufWriter};

pub(super) fn command_rewrite(file: &str, outfile: &str, groups: &[String]) -> Result<()> {
    let ndx = NdxFile::open(file).with_context(|| format!("reading index file '{file}'"))?;
    info!("Index file '{file}' loaded, {} groups", ndx.len());

    let missing = groups
        .iter()
        .filter(|g| ndx.get_group(g).is_err())
        .collect::<Vec<_>>();
    for g in &missing {
        warn!("Group '{g}' not found, skipped");
    }
    if !groups.is_empty() && missing.len() == groups.len() {
        bail!("none of the requested groups is present in '{file}'");
    }

    let out = BufWriter::new(
        File::create(outfile).with_context(|| format!("creating output file '{outfile}'"))?,
    );

    if groups.is_empty() {
        ndx.write(out)?;
        info!("All groups written to '{outfile}'");
    } else {
        write_ndx(ndx.groups(), out, Some(groups))?;
        info!(
            "{} groups written to '{outfile}'",
            groups.len() - missing.len()
        );
    }
    Ok(())
}
