//! Journal entry record

use crate::domain::Mood;
use crate::error::{MoodlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// One journal record as stored in the `journal_entries` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,

    #[serde(default = "Mood::missing")]
    pub mood: Mood,

    pub timestamp: DateTime<Utc>,

    /// Fields written by other clients (cover image, text style, ...) that are
    /// carried through rewrites untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl JournalEntry {
    /// Create a new entry with a fresh id
    pub fn new(title: String, content: String, mood: Mood, timestamp: DateTime<Utc>) -> Self {
        JournalEntry {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            mood,
            timestamp,
            extra: Map::new(),
        }
    }

    /// Decode a raw stored record.
    ///
    /// Missing or null text and moods are accepted, as are unknown moods. Fields
    /// of the wrong type are reported as a validation error naming the record
    /// position.
    pub fn from_value(index: usize, value: &Value) -> Result<Self> {
        JournalEntry::deserialize(value)
            .map_err(|e| MoodlogError::Validation(format!("Entry #{} is malformed: {}", index, e)))
    }
}
