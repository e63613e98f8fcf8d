//! `pathways buildings` - list every building on the campus map

use crate::cli::{Cli, OutputFormat};
use pathways_core::campus::CampusMap;
use pathways_core::error::Result;

/// Execute the buildings command
pub fn execute(cli: &Cli, map: &CampusMap) -> Result<()> {
    let names = map.building_names();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(names)?);
        }
        OutputFormat::Human => {
            if names.is_empty() {
                if !cli.quiet {
                    println!("No buildings found");
                }
                return Ok(());
            }
            for (short, long) in names {
                println!("{}\t{}", short, long);
            }
        }
    }

    Ok(())
}
