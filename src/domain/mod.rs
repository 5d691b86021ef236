//! Domain layer - Journal data model and analytics

pub mod calendar;
pub mod clock;
pub mod entry;
pub mod insights;
pub mod mood;
pub mod profile;
pub mod sentiment;
pub mod time_range;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entry::JournalEntry;
pub use insights::{analyze, analyze_with, DisplayZone, EntryFormatter, InsightReport};
pub use mood::Mood;
pub use profile::{Theme, UserProfile};
pub use sentiment::score_sentiment;
pub use time_range::TimeRange;
