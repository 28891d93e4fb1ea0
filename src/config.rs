//! Configuration loading
//!
//! Reads `careersearch/config.toml` from the platform config directory. A
//! missing file means defaults; an unreadable or invalid one is reported to
//! the caller, which logs it and falls back to defaults.

mod types;

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub use types::{
    ApiConfig, Config, DEFAULT_BASE_URL, DEFAULT_DETAIL_PATH, DEFAULT_ITEMS_PATH,
    DEFAULT_MAX_SUGGESTIONS, SearchConfig,
};

/// Default config file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("careersearch").join("config.toml"))
}

/// Load the config at `path`; a missing file yields defaults
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            });
        }
    };

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Load the config, degrading to defaults with a warning on any error
pub fn load_config(path: Option<&Path>) -> Config {
    let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => path,
        None => return Config::default(),
    };

    match load_config_from(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}; using defaults", e);
            Config::default()
        }
    }
}
