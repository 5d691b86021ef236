//! Application layer - Use cases and orchestration

pub mod delete_entry;
pub mod history;
pub mod init;
pub mod insights;
pub mod inspiration;
pub mod manage_config;
pub mod profile;
pub mod save_entry;

pub use delete_entry::DeleteEntryService;
pub use history::HistoryService;
pub use insights::InsightsService;
pub use inspiration::InspirationService;
pub use manage_config::ConfigService;
pub use profile::{ProfileService, ProfileUpdate};
pub use save_entry::{EntryEdit, NewEntry, SaveEntryService};
