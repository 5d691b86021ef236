//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod kv;
pub mod quotes;
pub mod repository;
pub mod store;

pub use config::Config;
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use quotes::{HttpQuoteProvider, Quote, QuoteProvider};
pub use repository::{FileSystemRepository, JournalRepository};
pub use store::EntryStore;
