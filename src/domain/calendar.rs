//! Calendar view of the journal history

use crate::domain::insights::EntryFormatter;
use crate::domain::{JournalEntry, Mood};
use crate::error::{MoodlogError, Result};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Parse a calendar day written as YYYY-MM-DD
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| MoodlogError::InvalidDate(input.to_string()))
}

/// Parse a month written as YYYY-MM into (year, month)
pub fn parse_month(input: &str) -> Result<(i32, u32)> {
    NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d")
        .map(|d| (d.year(), d.month()))
        .map_err(|_| MoodlogError::InvalidDate(input.to_string()))
}

/// Mood marker for each calendar day that has entries.
///
/// When a day has several entries, the one stored last decides the mark.
pub fn calendar_marks(
    entries: &[JournalEntry],
    formatter: &dyn EntryFormatter,
) -> BTreeMap<NaiveDate, Mood> {
    let mut marks = BTreeMap::new();
    for entry in entries {
        marks.insert(formatter.local_date(&entry.timestamp), entry.mood.clone());
    }
    marks
}

/// Restrict calendar marks to one month
pub fn marks_in_month(
    marks: &BTreeMap<NaiveDate, Mood>,
    year: i32,
    month: u32,
) -> BTreeMap<NaiveDate, Mood> {
    marks
        .iter()
        .filter(|(date, _)| date.year() == year && date.month() == month)
        .map(|(date, mood)| (*date, mood.clone()))
        .collect()
}

/// Entries written on the given calendar day, in stored order
pub fn entries_on(
    entries: &[JournalEntry],
    date: NaiveDate,
    formatter: &dyn EntryFormatter,
) -> Vec<JournalEntry> {
    entries
        .iter()
        .filter(|e| formatter.local_date(&e.timestamp) == date)
        .cloned()
        .collect()
}

/// Sort entries newest first (ties keep stored order)
pub fn newest_first(mut entries: Vec<JournalEntry>) -> Vec<JournalEntry> {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries
}
