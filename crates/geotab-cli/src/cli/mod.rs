//! CLI for geotab.

mod commands;
mod overrides;

use anyhow::Result;
use clap::{Parser, Subcommand};
use geotab_core::config;
use std::path::PathBuf;

use commands::{run_config, run_geocode, run_lookup};
use overrides::Overrides;

/// Top-level CLI for geotab.
#[derive(Debug, Parser)]
#[command(name = "geotab")]
#[command(about = "geotab: add latitude/longitude to a CSV of postal addresses", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/geotab/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Geocode every row of a CSV file with address, city and state columns.
    Geocode {
        /// Input CSV file.
        input: PathBuf,
        /// Output CSV file (default: <input stem>_geocoded.csv next to the input).
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Geocode a single address and print its coordinates.
    Lookup {
        /// Full address text, sent verbatim.
        address: String,
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Show the config file location and the effective settings.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };

        match cli.command {
            CliCommand::Geocode {
                input,
                output,
                overrides,
            } => {
                overrides.apply(&mut cfg);
                tracing::debug!("effective config: {:?}", cfg);
                run_geocode(&cfg, &input, output.as_deref())?;
            }
            CliCommand::Lookup { address, overrides } => {
                overrides.apply(&mut cfg);
                tracing::debug!("effective config: {:?}", cfg);
                run_lookup(&cfg, &address)?;
            }
            CliCommand::Config => run_config(&cfg, cli.config.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
