//! Entry analytics: mood counts, mood trend and common words
//!
//! Everything here is a pure function of the entries passed in. Nothing is
//! read from storage and nothing is cached between calls.

pub mod format;
pub mod trend;
pub mod words;

pub use format::{DisplayZone, EntryFormatter};
pub use trend::{mood_trend, TrendPoint};
pub use words::{common_words, WordCount};

use crate::domain::{JournalEntry, Mood};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Aggregates shown on the insights screen
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightReport {
    pub positive_count: usize,
    pub neutral_count: usize,
    pub negative_count: usize,
    pub mood_trend: Vec<TrendPoint>,
    pub common_words: Vec<WordCount>,
}

/// Analyze entries using the machine's local time zone for chart labels.
///
/// The CLI goes through [`analyze_with`] instead, since the display zone is
/// configured per journal.
pub fn analyze(entries: &[JournalEntry]) -> InsightReport {
    analyze_with(entries, &DisplayZone::Local)
}

/// Analyze entries with an explicit formatter
pub fn analyze_with(entries: &[JournalEntry], formatter: &dyn EntryFormatter) -> InsightReport {
    let count = |mood: Mood| entries.iter().filter(|e| e.mood == mood).count();

    InsightReport {
        positive_count: count(Mood::Positive),
        neutral_count: count(Mood::Neutral),
        negative_count: count(Mood::Negative),
        mood_trend: mood_trend(entries, formatter),
        common_words: common_words(entries, formatter),
    }
}

/// Analyze raw stored records.
///
/// Records are decoded leniently, but a record whose fields have the wrong
/// type fails the whole call with a validation error.
pub fn analyze_records(records: &[Value], formatter: &dyn EntryFormatter) -> Result<InsightReport> {
    let entries = decode_records(records)?;
    Ok(analyze_with(&entries, formatter))
}

/// Decode every record, failing on the first one with a wrongly typed field
pub fn decode_records(records: &[Value]) -> Result<Vec<JournalEntry>> {
    records
        .iter()
        .enumerate()
        .map(|(i, value)| JournalEntry::from_value(i, value))
        .collect()
}
