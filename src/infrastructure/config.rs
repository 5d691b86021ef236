//! Configuration management

use crate::domain::DisplayZone;
use crate::error::{MoodlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Directory holding config and data inside a journal root
pub const MOODLOG_DIR: &str = ".moodlog";

/// Public random-quote endpoint
pub const DEFAULT_QUOTE_URL: &str = "https://api.quotable.io/random";

fn default_quote_url() -> String {
    DEFAULT_QUOTE_URL.to_string()
}

fn default_timezone() -> String {
    "local".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_quote_url")]
    pub quote_url: String,

    /// `local` or a fixed offset such as `+02:00`
    #[serde(default = "default_timezone")]
    pub timezone: String,

    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            quote_url: default_quote_url(),
            timezone: default_timezone(),
            created: Utc::now(),
        }
    }

    /// Load config from .moodlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(MOODLOG_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodlogError::NotMoodlogDirectory(path.to_path_buf())
            } else {
                MoodlogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let moodlog_dir = path.join(MOODLOG_DIR);
        let config_path = moodlog_dir.join("config.toml");

        if !moodlog_dir.exists() {
            fs::create_dir(&moodlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Zone used for calendar days and chart labels
    pub fn display_zone(&self) -> Result<DisplayZone> {
        DisplayZone::from_str(&self.timezone).map_err(MoodlogError::Config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
