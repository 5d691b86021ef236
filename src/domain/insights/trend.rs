//! Mood trend sampling

use super::format::EntryFormatter;
use crate::domain::JournalEntry;
use serde::{Deserialize, Serialize};

/// Most points shown on the trend chart
pub const TREND_POINTS: usize = 7;

/// One point on the mood chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub value: u8,
}

/// Build the mood-over-time series.
///
/// Entries are ordered by timestamp (ties keep input order). Up to seven are
/// shown as-is; longer histories are sampled down to seven.
pub fn mood_trend(entries: &[JournalEntry], formatter: &dyn EntryFormatter) -> Vec<TrendPoint> {
    let mut sorted: Vec<&JournalEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);

    sample_indices(sorted.len(), TREND_POINTS)
        .into_iter()
        .map(|i| {
            let entry = sorted[i];
            TrendPoint {
                label: formatter.trend_label(&entry.timestamp),
                value: entry.mood.trend_value(),
            }
        })
        .collect()
}

/// Pick which positions of a chronological list of `len` items to display.
///
/// When `len > count` the first and last are always kept and the middle
/// `count - 2` slots step through the list at `len / (count - 1)`. The stride
/// is floored, so samples bunch towards the start rather than spreading evenly.
pub fn sample_indices(len: usize, count: usize) -> Vec<usize> {
    if len <= count {
        return (0..len).collect();
    }
    if count < 2 {
        return (0..count).collect();
    }

    let last = len - 1;
    let stride = len / (count - 1);

    let mut indices = Vec::with_capacity(count);
    indices.push(0);
    for slot in 1..count - 1 {
        indices.push((slot * stride).min(last));
    }
    indices.push(last);
    indices
}
