//! Time windows for the insights view

use crate::domain::JournalEntry;
use chrono::{DateTime, Duration, Utc};
use std::str::FromStr;

/// How far back insights look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    LastWeek,
    #[default]
    LastMonth,
    LastQuarter,
    All,
}

impl TimeRange {
    /// Number of days covered, `None` for all time
    pub fn days(&self) -> Option<i64> {
        match self {
            TimeRange::LastWeek => Some(7),
            TimeRange::LastMonth => Some(30),
            TimeRange::LastQuarter => Some(90),
            TimeRange::All => None,
        }
    }

    /// Earliest timestamp still inside the window
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.days().map(|days| now - Duration::days(days))
    }

    /// Keep the entries written at or after the cutoff, preserving order
    pub fn filter(&self, entries: &[JournalEntry], now: DateTime<Utc>) -> Vec<JournalEntry> {
        match self.cutoff(now) {
            Some(cutoff) => entries
                .iter()
                .filter(|e| e.timestamp >= cutoff)
                .cloned()
                .collect(),
            None => entries.to_vec(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::LastWeek => "7days",
            TimeRange::LastMonth => "30days",
            TimeRange::LastQuarter => "90days",
            TimeRange::All => "all",
        }
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "7days" | "week" => Ok(TimeRange::LastWeek),
            "30days" | "month" => Ok(TimeRange::LastMonth),
            "90days" | "quarter" => Ok(TimeRange::LastQuarter),
            "all" => Ok(TimeRange::All),
            _ => Err(format!(
                "Invalid range: '{}'. Valid ranges are: 7days, 30days, 90days, all",
                s
            )),
        }
    }
}
