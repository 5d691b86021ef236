//! moodlog - Mood journal for the terminal
//!
//! Keeps dated, mood-tagged journal entries in a small JSON key-value store and
//! derives insights from them: mood counts, a mood trend and the most common
//! words.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
