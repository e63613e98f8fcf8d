//! `pathways route` - shortest walking route between two buildings
//!
//! A missing route is a normal answer, not an error: human output says so
//! and JSON output carries `"found": false` with a null path.

use crate::cli::{Cli, OutputFormat};
use pathways_core::campus::{CampusMap, Route};
use pathways_core::error::Result;

/// Execute the route command
pub fn execute(cli: &Cli, map: &CampusMap, start: &str, end: &str) -> Result<()> {
    let route = map.find_shortest_path(start, end)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "end": end,
                "found": route.is_some(),
                "cost": route.as_ref().map(Route::cost),
                "path": route,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match route {
            Some(route) => print_route(cli, map, start, end, &route)?,
            None => println!("No route from {} to {}", start, end),
        },
    }

    Ok(())
}

fn print_route(cli: &Cli, map: &CampusMap, start: &str, end: &str, route: &Route) -> Result<()> {
    if !cli.quiet {
        println!(
            "Path from {} to {}:",
            map.long_name_for_short(start)?,
            map.long_name_for_short(end)?
        );
    }
    for segment in route {
        println!(
            "\t{} -> {} ({:.0} feet)",
            segment.start, segment.end, segment.cost
        );
    }
    println!("Total distance: {:.0} feet", route.cost());
    Ok(())
}
