//! `pathways connect` - chain of shared books linking two characters

use crate::cli::{Cli, OutputFormat};
use pathways_core::error::Result;
use pathways_core::network::CoOccurrenceNetwork;

/// Execute the connect command
pub fn execute(cli: &Cli, network: &CoOccurrenceNetwork, from: &str, to: &str) -> Result<()> {
    let path = network.connect(from, to)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "found": path.is_some(),
                "hops": path.as_ref().map(Vec::len),
                "path": path,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("path from {} to {}:", from, to);
            match path {
                Some(edges) => {
                    for edge in &edges {
                        println!("{} to {} via {}", edge.from, edge.to, edge.label);
                    }
                }
                None => println!("no path found"),
            }
        }
    }

    Ok(())
}
