use clap::Parser;
use price_core::models::PriceList;
use price_reconciler::find_overlaps;
use std::path::PathBuf;
use tracing::{Level, event};

mod io;
pub use io::*;

mod commands;
pub use commands::*;

mod config;
pub use config::{AppConfig, OutputConfig};

// The top-level arguments: an optional config file and the subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "PRICEMERGE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        let AppConfig { output } = AppConfig::load(self.config.as_deref())?;

        match self.command {
            Commands::Merge { io } => {
                let document: MergeDocument = io.read_json()?;
                let merged = document.merge(output.sort)?;
                output.write(io.write()?, &merged)?;
            }
            Commands::Check { io } => {
                let prices: PriceList = io.read_json()?;
                let overlaps = find_overlaps(&prices);
                output.write(io.write()?, &overlaps)?;

                if !overlaps.is_empty() {
                    event!(Level::WARN, count = overlaps.len(), "prices overlap");
                    return Err(CliError::Overlapping(overlaps.len()))?;
                }
            }
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Config file {} does not exist", .0.display())]
    MissingConfig(PathBuf),
    #[error("Found {0} pair(s) of overlapping prices")]
    Overlapping(usize),
}
