use std::path::{Path, PathBuf};

use super::Config;
use crate::{WindowError, WindowResult};

/// Returns the config directory: `~/.config/winpos/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("winpos"))
}

/// Returns the config file path: `~/.config/winpos/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
pub fn try_load() -> WindowResult<Config> {
    let path = config_path().ok_or_else(|| WindowError::Config {
        path: PathBuf::from("~/.config/winpos/config.toml"),
        message: "could not determine home directory".into(),
    })?;
    try_load_from(&path)
}

/// Tries to load and parse a config file at an explicit path.
///
/// Values are normalized via [`Config::validate`] after parsing.
pub fn try_load_from(path: &Path) -> WindowResult<Config> {
    let config_err = |message: String| WindowError::Config {
        path: path.to_path_buf(),
        message,
    };

    let content = std::fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;
    let mut config: Config = toml::from_str(&content).map_err(|e| config_err(e.to_string()))?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently returns defaults; other errors are reported
/// on stderr (logging is not up yet when this runs).
pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}

/// Like [`load`], for an explicit path.
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    match try_load_from(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}
