//! User-wide configuration location (~/.config/pathways/config.toml)

use std::path::PathBuf;

const CONFIG_DIR: &str = "pathways";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "PATHWAYS_CONFIG_DIR";

/// Path of the user-wide config file, whether or not it exists.
///
/// `PATHWAYS_CONFIG_DIR` replaces the platform config directory.
pub fn global_config_path() -> Option<PathBuf> {
    if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        return Some(PathBuf::from(env_dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
