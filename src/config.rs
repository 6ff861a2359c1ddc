//! Application configuration
//!
//! Defaults work out of the box; a TOML file and CLI/env flags can
//! override individual fields. Missing config file means defaults, a
//! present but invalid file is an error.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

const FEED_URL: &str = "https://stooq.com/q/d/l/?s=gc.f&i=d";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// TCP port for the static server.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the app shell and assets.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// Directory holding the state database.
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,

    /// Gold price CSV endpoint.
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
}

fn default_port() -> u16 {
    3000
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_state_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("synapse-growth")
}

fn default_feed_url() -> String {
    FEED_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            public_dir: default_public_dir(),
            state_dir: default_state_dir(),
            feed_url: default_feed_url(),
        }
    }
}

impl Config {
    /// Load from a TOML file, or defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Write the current configuration as TOML.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let rendered = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Could not render config: {e}")))?;
        std::fs::write(path, rendered)?;
        Ok(())
    }

    /// Path of the sled database under the state directory.
    pub fn state_db_path(&self) -> PathBuf {
        self.state_dir.join("state.sled")
    }
}

/// Default location of the config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("synapse-growth")
        .join("config.toml")
}
