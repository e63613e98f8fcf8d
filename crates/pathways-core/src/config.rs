//! Dataset configuration for pathways
//!
//! Lookup order: an explicit `--config` file, `./pathways.toml`, the
//! user-wide `config.toml`, then built-in defaults. Relative dataset paths
//! resolve against the directory of the file that named them, or the
//! working directory for defaults.

pub mod global;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PathwaysError, Result};

pub use types::{
    CampusConfig, NetworkConfig, PathwaysConfig, DEFAULT_BUILDINGS_FILE, DEFAULT_NETWORK_FILE,
    DEFAULT_PATHS_FILE, LOCAL_CONFIG_FILE,
};

fn anchor(base: &Path, path: &mut PathBuf) {
    if path.is_relative() {
        *path = base.join(&*path);
    }
}

impl PathwaysConfig {
    /// Make every relative dataset path relative to `base`
    pub fn resolve_relative_to(&mut self, base: &Path) {
        anchor(base, &mut self.campus.buildings);
        anchor(base, &mut self.campus.paths);
        anchor(base, &mut self.network.data);
    }

    /// Load configuration from a file, anchoring its paths to the file's directory
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| crate::map_io_err!("read config", path, e))?;
        let mut config: PathwaysConfig = toml::from_str(&content)?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.resolve_relative_to(base);
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| PathwaysError::Other(format!("failed to serialize config: {}", e)))
    }

    /// Find and load the effective configuration
    #[tracing::instrument(skip_all, fields(explicit = ?explicit, cwd = %cwd.display()))]
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(source = %path.display(), "config_explicit");
            return Self::load(path);
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            tracing::debug!(source = %local.display(), "config_local");
            return Self::load(&local);
        }

        if let Some(user) = global::global_config_path().filter(|p| p.is_file()) {
            tracing::debug!(source = %user.display(), "config_global");
            return Self::load(&user);
        }

        tracing::debug!("config_defaults");
        let mut config = Self::default();
        config.resolve_relative_to(cwd);
        Ok(config)
    }
}
