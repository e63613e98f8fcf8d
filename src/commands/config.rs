//! `pathways config` - print the effective configuration

use crate::cli::{Cli, OutputFormat};
use pathways_core::config::PathwaysConfig;
use pathways_core::error::Result;

pub fn execute(cli: &Cli, config: &PathwaysConfig) -> Result<()> {
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Human => print!("{}", config.to_toml()?),
    }
    Ok(())
}
