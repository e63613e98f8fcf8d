//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::{CampusDataArgs, Cli, Commands};
use crate::commands::{buildings, config, connect, route};
use pathways_core::campus::CampusMap;
use pathways_core::config::PathwaysConfig;
use pathways_core::error::Result;
use pathways_core::network::CoOccurrenceNetwork;
use pathways_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: PathwaysConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: PathwaysConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Load the campus map, preferring per-command file flags over config
    pub fn load_campus(&self, data: &CampusDataArgs) -> Result<CampusMap> {
        let buildings = pick(data.buildings.as_deref(), &self.config.campus.buildings);
        let paths = pick(data.paths.as_deref(), &self.config.campus.paths);
        let map = CampusMap::load(&buildings, &paths)?;
        trace_time!(self.start, "load_campus", vertices = map.graph().size());
        Ok(map)
    }

    /// Load the co-occurrence network, preferring `--data` over config
    pub fn load_network(&self, data: Option<&Path>) -> Result<CoOccurrenceNetwork> {
        let path = pick(data, &self.config.network.data);
        let network = CoOccurrenceNetwork::load(&path)?;
        trace_time!(self.start, "load_network", vertices = network.graph().size());
        Ok(network)
    }
}

fn pick(flag: Option<&Path>, configured: &Path) -> PathBuf {
    flag.unwrap_or(configured).to_path_buf()
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No subcommand given
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pathways {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest campus routes and character connections.");
        println!();
        println!("Run `pathways --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Buildings { data } => {
                let map = ctx.load_campus(data)?;
                buildings::execute(ctx.cli, &map)
            }
            Commands::Route { start, end, data } => {
                let map = ctx.load_campus(data)?;
                route::execute(ctx.cli, &map, start, end)
            }
            Commands::Connect { from, to, data } => {
                let network = ctx.load_network(data.as_deref())?;
                connect::execute(ctx.cli, &network, from, to)
            }
            Commands::Config => config::execute(ctx.cli, &ctx.config),
        }
    }
}
