//! Calendar and text formatting used by the analytics engine

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};
use std::fmt;
use std::str::FromStr;

/// Turns instants into calendar dates and normalizes text case.
///
/// The engine never reads the process time zone itself; callers hand it one of
/// these so results do not depend on where the tests happen to run.
pub trait EntryFormatter {
    /// Calendar date the instant falls on for the reader
    fn local_date(&self, timestamp: &DateTime<Utc>) -> NaiveDate;

    /// `MM/DD` chart label
    fn trend_label(&self, timestamp: &DateTime<Utc>) -> String {
        self.local_date(timestamp).format("%m/%d").to_string()
    }

    fn lowercase(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

/// Time zone entries are displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// The machine's local zone
    #[default]
    Local,
    /// A fixed UTC offset
    Fixed(FixedOffset),
}

impl DisplayZone {
    /// Render an instant in this zone with a strftime pattern
    pub fn format(&self, timestamp: &DateTime<Utc>, pattern: &str) -> String {
        match self {
            DisplayZone::Local => timestamp.with_timezone(&Local).format(pattern).to_string(),
            DisplayZone::Fixed(offset) => timestamp.with_timezone(offset).format(pattern).to_string(),
        }
    }
}

impl EntryFormatter for DisplayZone {
    fn local_date(&self, timestamp: &DateTime<Utc>) -> NaiveDate {
        match self {
            DisplayZone::Local => timestamp.with_timezone(&Local).date_naive(),
            DisplayZone::Fixed(offset) => timestamp.with_timezone(offset).date_naive(),
        }
    }
}

impl FromStr for DisplayZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "local" => return Ok(DisplayZone::Local),
            "utc" | "z" => return Ok(DisplayZone::Fixed(Utc.fix())),
            _ => {}
        }

        // +HH:MM / -HH:MM, validated by the RFC 3339 parser
        DateTime::parse_from_rfc3339(&format!("2000-01-01T00:00:00{}", trimmed))
            .map(|dt| DisplayZone::Fixed(*dt.offset()))
            .map_err(|_| {
                format!(
                    "Invalid timezone: '{}'. Use 'local', 'utc' or an offset like +02:00",
                    s
                )
            })
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayZone::Local => f.write_str("local"),
            DisplayZone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}
