mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, load_from, try_load, try_load_from};

/// Top-level configuration for the `winpos` command-line tool.
///
/// Loaded from `~/.config/winpos/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`. The library
/// functions never read it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LogConfig,
}

impl Config {
    /// Normalizes values that would otherwise be silently misread.
    pub fn validate(&mut self) {
        self.logging.validate();
    }
}
