//! Create and edit journal entries

use crate::domain::{Clock, JournalEntry, Mood, SystemClock};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{EntryStore, KeyValueStore};
use chrono::{DateTime, Utc};
use tracing::info;

const MISSING_FIELDS: &str = "Please enter both a title and your journal entry.";

/// Fields for a new entry
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    /// Defaults to neutral
    pub mood: Option<Mood>,
    /// Defaults to now
    pub timestamp: Option<DateTime<Utc>>,
}

/// Fields to overwrite on an existing entry; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct EntryEdit {
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<Mood>,
}

/// Parse an RFC 3339 timestamp given on the command line
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| MoodlogError::InvalidDate(input.to_string()))
}

fn require_text(title: &str, content: &str) -> Result<()> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(MoodlogError::Validation(MISSING_FIELDS.to_string()));
    }
    Ok(())
}

/// Service for writing entries
pub struct SaveEntryService<K: KeyValueStore> {
    store: EntryStore<K>,
    clock: Box<dyn Clock>,
}

impl<K: KeyValueStore> SaveEntryService<K> {
    pub fn new(store: EntryStore<K>) -> Self {
        Self::with_clock(store, Box::new(SystemClock))
    }

    pub fn with_clock(store: EntryStore<K>, clock: Box<dyn Clock>) -> Self {
        SaveEntryService { store, clock }
    }

    /// Store a new entry and return it
    pub fn create(&self, new: NewEntry) -> Result<JournalEntry> {
        require_text(&new.title, &new.content)?;

        let entry = JournalEntry::new(
            new.title,
            new.content,
            new.mood.unwrap_or(Mood::Neutral),
            new.timestamp.unwrap_or_else(|| self.clock.now()),
        );
        self.store.upsert(entry.clone())?;

        info!(id = %entry.id, mood = %entry.mood, "Saved new journal entry");
        Ok(entry)
    }

    /// Overwrite fields of an existing entry. Id and timestamp are kept.
    pub fn edit(&self, id: &str, edit: EntryEdit) -> Result<JournalEntry> {
        let mut entry = self
            .store
            .find(id)
            .ok_or_else(|| MoodlogError::EntryNotFound(id.to_string()))?;

        if let Some(title) = edit.title {
            entry.title = title;
        }
        if let Some(content) = edit.content {
            entry.content = content;
        }
        if let Some(mood) = edit.mood {
            entry.mood = mood;
        }
        require_text(&entry.title, &entry.content)?;

        self.store.upsert(entry.clone())?;

        info!(id = %entry.id, "Updated journal entry");
        Ok(entry)
    }
}
