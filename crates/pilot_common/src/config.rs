//! User configuration loaded from `~/.config/pilot/config.toml`.
//!
//! Only startup defaults live here; `set engine` and `theme` change the
//! running session without writing the file back.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Engine used when no site/engine is named in the input.
    #[serde(default = "default_engine")]
    pub default_engine: String,

    /// Display palette: "light" or "dark".
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_engine() -> String {
    "Google".to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_engine: default_engine(),
            theme: default_theme(),
        }
    }
}

impl Config {
    /// Config file path: `$PILOT_CONFIG` overrides, then XDG config dir.
    pub fn path() -> Option<PathBuf> {
        if let Ok(explicit) = std::env::var("PILOT_CONFIG") {
            return Some(PathBuf::from(explicit));
        }
        dirs::config_dir().map(|d| d.join("pilot").join(CONFIG_FILE))
    }

    /// Load the config, falling back to defaults when the file is missing
    /// or unreadable. A malformed file is an error; silently ignoring it
    /// would hide typos from the user.
    pub fn load() -> Result<Self, crate::error::PilotError> {
        let Some(path) = Self::path() else {
            return Ok(Config::default());
        };
        match fs::read_to_string(&path) {
            Ok(raw) => {
                let config: Config = toml::from_str(&raw)
                    .map_err(|e| crate::error::PilotError::Config(e.to_string()))?;
                debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(_) => Ok(Config::default()),
        }
    }
}
