//! Profile use case

use crate::domain::{Theme, UserProfile};
use crate::error::Result;
use crate::infrastructure::{EntryStore, KeyValueStore};
use tracing::info;

/// Profile fields to change; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub daily_quote: Option<String>,
    pub reminder_enabled: Option<bool>,
    pub theme: Option<Theme>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.bio.is_none()
            && self.daily_quote.is_none()
            && self.reminder_enabled.is_none()
            && self.theme.is_none()
    }
}

/// Service for reading and updating the user profile
pub struct ProfileService<K: KeyValueStore> {
    store: EntryStore<K>,
}

impl<K: KeyValueStore> ProfileService<K> {
    pub fn new(store: EntryStore<K>) -> Self {
        ProfileService { store }
    }

    /// Saved profile, or an empty one when none was saved yet
    pub fn show(&self) -> UserProfile {
        self.store.load_profile().unwrap_or_default()
    }

    /// Apply changes, validate and save
    pub fn update(&self, update: ProfileUpdate) -> Result<UserProfile> {
        let mut profile = self.show();

        if let Some(name) = update.name {
            profile.name = name;
        }
        if let Some(email) = update.email {
            profile.email = email.trim().to_string();
        }
        if let Some(bio) = update.bio {
            profile.bio = bio;
        }
        if let Some(daily_quote) = update.daily_quote {
            profile.daily_quote = daily_quote;
        }
        if let Some(enabled) = update.reminder_enabled {
            profile.reminder_enabled = enabled;
        }
        if let Some(theme) = update.theme {
            profile.theme = theme;
        }

        profile.validate()?;
        self.store.save_profile(&profile)?;

        info!("Saved user profile");
        Ok(profile)
    }
}
