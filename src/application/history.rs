//! History and calendar use case

use crate::domain::calendar::{calendar_marks, entries_on, marks_in_month, newest_first};
use crate::domain::{DisplayZone, JournalEntry, Mood};
use crate::infrastructure::{EntryStore, KeyValueStore};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Service for browsing past entries
pub struct HistoryService<K: KeyValueStore> {
    store: EntryStore<K>,
    zone: DisplayZone,
}

impl<K: KeyValueStore> HistoryService<K> {
    pub fn new(store: EntryStore<K>, zone: DisplayZone) -> Self {
        HistoryService { store, zone }
    }

    /// Entries newest first, optionally only those written on `day`
    pub fn list(&self, day: Option<NaiveDate>) -> Vec<JournalEntry> {
        let entries = self.store.load_all();
        let selected = match day {
            Some(date) => entries_on(&entries, date, &self.zone),
            None => entries,
        };
        newest_first(selected)
    }

    /// Mood mark per day, optionally limited to one (year, month)
    pub fn calendar(&self, month: Option<(i32, u32)>) -> BTreeMap<NaiveDate, Mood> {
        let marks = calendar_marks(&self.store.load_all(), &self.zone);
        match month {
            Some((year, month)) => marks_in_month(&marks, year, month),
            None => marks,
        }
    }
}
