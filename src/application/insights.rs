//! Insights use case

use crate::domain::insights::{analyze_records, decode_records};
use crate::domain::{analyze_with, Clock, DisplayZone, InsightReport, SystemClock, TimeRange};
use crate::error::Result;
use crate::infrastructure::{EntryStore, KeyValueStore};
use tracing::debug;

/// Service computing insights over a time window
pub struct InsightsService<K: KeyValueStore> {
    store: EntryStore<K>,
    zone: DisplayZone,
    clock: Box<dyn Clock>,
}

impl<K: KeyValueStore> InsightsService<K> {
    pub fn new(store: EntryStore<K>, zone: DisplayZone) -> Self {
        Self::with_clock(store, zone, Box::new(SystemClock))
    }

    pub fn with_clock(store: EntryStore<K>, zone: DisplayZone, clock: Box<dyn Clock>) -> Self {
        InsightsService { store, zone, clock }
    }

    /// Analyze the entries that fall inside `range`.
    ///
    /// Every stored record is checked, so one with a wrongly typed field fails
    /// the call instead of being left out of the aggregates.
    pub fn execute(&self, range: TimeRange) -> Result<InsightReport> {
        let records = self.store.load_records();
        if range == TimeRange::All {
            debug!(range = range.label(), total = records.len(), "Analyzing entries");
            return analyze_records(&records, &self.zone);
        }

        let entries = decode_records(&records)?;
        let selected = range.filter(&entries, self.clock.now());
        debug!(
            range = range.label(),
            total = entries.len(),
            selected = selected.len(),
            "Analyzing entries"
        );
        Ok(analyze_with(&selected, &self.zone))
    }
}
