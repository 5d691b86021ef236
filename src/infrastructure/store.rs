//! Entry and profile persistence on top of a key-value store
//!
//! All entries live in one JSON array under `journal_entries`; every mutation
//! reads the whole array, changes it and writes it back.

use crate::domain::{JournalEntry, UserProfile};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::kv::KeyValueStore;
use serde_json::Value;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, error, warn};

pub const ENTRIES_KEY: &str = "journal_entries";
pub const PROFILE_KEY: &str = "user_profile";

pub struct EntryStore<K: KeyValueStore> {
    kv: K,
    write_lock: Mutex<()>,
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

impl<K: KeyValueStore> EntryStore<K> {
    pub fn new(kv: K) -> Self {
        EntryStore {
            kv,
            write_lock: Mutex::new(()),
        }
    }

    /// Underlying key-value store
    pub fn kv(&self) -> &K {
        &self.kv
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| MoodlogError::Storage("entry store lock poisoned".to_string()))
    }

    fn read_records(&self) -> Result<Option<Vec<Value>>> {
        match self.kv.get(ENTRIES_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn write_records(&self, records: &[Value]) -> Result<()> {
        let json = serde_json::to_string(records)?;
        self.kv.set(ENTRIES_KEY, &json)
    }

    /// Stored records exactly as written, in stored order.
    ///
    /// A missing or unreadable collection yields an empty list; the failure is
    /// logged rather than returned. Individual records are not checked.
    pub fn load_records(&self) -> Vec<Value> {
        match self.read_records() {
            Ok(records) => records.unwrap_or_default(),
            Err(e) => {
                error!(error = %e, "Error retrieving journal entries");
                Vec::new()
            }
        }
    }

    /// All decodable entries in stored order. Records that fail to decode are
    /// logged and skipped.
    pub fn load_all(&self) -> Vec<JournalEntry> {
        self.load_records()
            .iter()
            .enumerate()
            .filter_map(|(i, record)| match JournalEntry::from_value(i, record) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "Skipping journal entry");
                    None
                }
            })
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<JournalEntry> {
        self.load_all().into_iter().find(|e| e.id == id)
    }

    /// Replace the entry with the same id in place, or append it.
    ///
    /// Other records are written back untouched, including ones that do not
    /// decode.
    pub fn upsert(&self, entry: JournalEntry) -> Result<()> {
        let _guard = self.lock()?;
        let mut records = self.read_records()?.unwrap_or_default();
        let record = serde_json::to_value(&entry)?;

        match records.iter().position(|r| record_id(r) == Some(entry.id.as_str())) {
            Some(index) => {
                debug!(id = %entry.id, index, "Updating journal entry");
                records[index] = record;
            }
            None => {
                debug!(id = %entry.id, "Adding journal entry");
                records.push(record);
            }
        }

        self.write_records(&records)
    }

    /// Remove the entry with the given id. Returns whether one was removed.
    pub fn delete_by_id(&self, id: &str) -> Result<bool> {
        let _guard = self.lock()?;
        let Some(mut records) = self.read_records()? else {
            return Ok(false);
        };

        let before = records.len();
        records.retain(|r| record_id(r) != Some(id));
        let removed = records.len() != before;

        self.write_records(&records)?;
        debug!(id, removed, "Deleted journal entry");
        Ok(removed)
    }

    /// The saved profile, or `None` when absent or unreadable
    pub fn load_profile(&self) -> Option<UserProfile> {
        let read = || -> Result<Option<UserProfile>> {
            match self.kv.get(PROFILE_KEY)? {
                Some(json) => Ok(Some(serde_json::from_str(&json)?)),
                None => Ok(None),
            }
        };

        match read() {
            Ok(profile) => profile,
            Err(e) => {
                error!(error = %e, "Error retrieving user profile");
                None
            }
        }
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        let _guard = self.lock()?;
        let json = serde_json::to_string(profile)?;
        self.kv.set(PROFILE_KEY, &json)
    }
}
