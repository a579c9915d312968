use anyhow::Result;
use clap::{Parser, Subcommand};

mod command_info;
mod command_preview;
mod command_rewrite;

use command_info::command_info;
use command_preview::command_preview;
use command_rewrite::command_rewrite;

/// molndx binary utility
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cmd {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lists the groups of an index file
    Info {
        /// Input index file
        #[arg(short, required = true)]
        file: String,
    },

    /// Reads an index file and writes it back with normalized formatting
    Rewrite {
        /// Input index file
        #[arg(short, required = true)]
        file: String,
        /// Output index file
        #[arg(short, default_value = "index.ndx")]
        outfile: String,
        /// Groups to write, in this order. All groups if not given
        #[arg(short, long)]
        groups: Vec<String>,
    },

    /// Shows how the groups would be loaded into a selection host
    Preview {
        /// Input index file
        #[arg(short, required = true)]
        file: String,
        /// Host options in TOML format
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .format_timestamp(None)
        .format_indent(Some(8))
        .filter_level(log::LevelFilter::Info)
        .init();

    let cmd = Cmd::parse();

    molndx::greeting(env!("CARGO_PKG_NAME"));

    match &cmd.command {
        Commands::Info { file } => {
            println!("▶ Action: info");
            command_info(file)?;
        }
        Commands::Rewrite {
            file,
            outfile,
            groups,
        } => {
            println!("▶ Action: rewrite");
            command_rewrite(file, outfile, groups)?;
        }
        Commands::Preview { file, config } => {
            println!("▶ Action: preview");
            command_preview(file, config.as_deref())?;
        }
    }
    Ok(())
}
