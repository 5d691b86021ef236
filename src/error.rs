//! Error types for moodlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodlog application
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Not a moodlog directory: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::NotMoodlogDirectory(_) => 2,
            MoodlogError::EntryNotFound(_) => 3,
            MoodlogError::Validation(_) => 4,
            MoodlogError::InvalidDate(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to create a new journal\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodlogError::EntryNotFound(id) => {
                format!(
                    "No journal entry with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'moodlog list' to see entry ids\n\
                    • Ids are printed by 'moodlog add' when an entry is created",
                    id
                )
            }
            MoodlogError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected formats:\n\
                    • Day: YYYY-MM-DD (e.g., 2025-01-17)\n\
                    • Month: YYYY-MM (e.g., 2025-01)\n\
                    • Timestamp: RFC 3339 (e.g., 2025-01-17T09:30:00Z)\n\n\
                    Examples:\n\
                    moodlog list --date 2025-01-17\n\
                    moodlog calendar --month 2025-01",
                    input
                )
            }
            MoodlogError::Config(msg) => {
                if msg.contains("Invalid mood") {
                    format!(
                        "{}\n\n\
                        Valid moods: positive, neutral, negative\n\
                        Example: moodlog add --title 'Walk' --content 'Sunny' --mood positive",
                        msg
                    )
                } else if msg.contains("Invalid range") {
                    format!(
                        "{}\n\n\
                        Valid ranges: 7days, 30days, 90days, all\n\
                        Example: moodlog insights --range 90days",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
