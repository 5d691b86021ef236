//! Delete entry use case

use crate::error::{MoodlogError, Result};
use crate::infrastructure::{EntryStore, KeyValueStore};
use tracing::info;

/// Service for removing entries
pub struct DeleteEntryService<K: KeyValueStore> {
    store: EntryStore<K>,
}

impl<K: KeyValueStore> DeleteEntryService<K> {
    pub fn new(store: EntryStore<K>) -> Self {
        DeleteEntryService { store }
    }

    /// Delete the entry with the given id
    pub fn execute(&self, id: &str) -> Result<()> {
        if !self.store.delete_by_id(id)? {
            return Err(MoodlogError::EntryNotFound(id.to_string()));
        }

        info!(id, "Deleted journal entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{JournalEntry, Mood};
    use crate::infrastructure::MemoryKeyValueStore;
    use chrono::Utc;

    #[test]
    fn test_delete_existing_and_missing() {
        let store = EntryStore::new(MemoryKeyValueStore::new());
        let entry = JournalEntry::new("t".into(), "c".into(), Mood::Neutral, Utc::now());
        store.upsert(entry.clone()).unwrap();

        let service = DeleteEntryService::new(store);
        service.execute(&entry.id).unwrap();

        assert!(matches!(
            service.execute(&entry.id),
            Err(MoodlogError::EntryNotFound(_))
        ));
        assert!(service.store.load_all().is_empty());
    }
}
