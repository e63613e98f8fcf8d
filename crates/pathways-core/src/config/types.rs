//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "pathways.toml";

pub const DEFAULT_BUILDINGS_FILE: &str = "campus_buildings.tsv";
pub const DEFAULT_PATHS_FILE: &str = "campus_paths.tsv";
pub const DEFAULT_NETWORK_FILE: &str = "marvel.tsv";

/// Dataset locations for both graphs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathwaysConfig {
    /// Campus map datasets
    #[serde(default)]
    pub campus: CampusConfig,

    /// Co-occurrence network dataset
    #[serde(default)]
    pub network: NetworkConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusConfig {
    /// TSV of `shortName`, `longName`, `x`, `y`
    #[serde(default = "default_buildings")]
    pub buildings: PathBuf,

    /// TSV of `x1`, `y1`, `x2`, `y2`, `distance`
    #[serde(default = "default_paths")]
    pub paths: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// TSV of `hero`, `book`
    #[serde(default = "default_network_data")]
    pub data: PathBuf,
}

impl Default for CampusConfig {
    fn default() -> Self {
        Self {
            buildings: default_buildings(),
            paths: default_paths(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            data: default_network_data(),
        }
    }
}

fn default_buildings() -> PathBuf {
    PathBuf::from(DEFAULT_BUILDINGS_FILE)
}

fn default_paths() -> PathBuf {
    PathBuf::from(DEFAULT_PATHS_FILE)
}

fn default_network_data() -> PathBuf {
    PathBuf::from(DEFAULT_NETWORK_FILE)
}
