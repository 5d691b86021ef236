//! Config management use case

use crate::domain::DisplayZone;
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::str::FromStr;

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "quote_url" => Ok(config.quote_url.clone()),
            "timezone" => Ok(config.timezone.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: quote_url, timezone, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "quote_url" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(MoodlogError::Config(format!(
                        "Invalid quote_url: '{}'. Expected an http(s) URL",
                        value
                    )));
                }
                config.quote_url = value.to_string();
            }
            "timezone" => {
                let zone = DisplayZone::from_str(value).map_err(MoodlogError::Config)?;
                config.timezone = zone.to_string();
            }
            "created" => {
                return Err(MoodlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: quote_url, timezone",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        ConfigService::new(repo)
    }

    #[test]
    fn test_set_and_get_timezone() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("timezone", "+02:00").unwrap();
        assert_eq!(service.get("timezone").unwrap(), "+02:00");

        service.set("timezone", "UTC").unwrap();
        assert_eq!(service.get("timezone").unwrap(), "+00:00");
    }

    #[test]
    fn test_invalid_timezone_rejected() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.set("timezone", "atlantis").is_err());
        assert_eq!(service.get("timezone").unwrap(), "local");
    }

    #[test]
    fn test_set_quote_url() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("quote_url", "http://localhost:8080/q").unwrap();
        assert_eq!(service.get("quote_url").unwrap(), "http://localhost:8080/q");
        assert!(service.set("quote_url", "ftp://x").is_err());
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.set("created", "2020-01-01T00:00:00Z").is_err());
        assert!(!service.get("created").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.get("editor").is_err());
        assert!(service.set("editor", "vim").is_err());
    }
}
