//! User profile record

use crate::error::{MoodlogError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Preferred color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            _ => Err(format!(
                "Invalid theme: '{}'. Valid themes are: light, dark, system",
                s
            )),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub reminder_enabled: bool,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub daily_quote: String,
}

impl UserProfile {
    /// Check the profile can be saved: a name is required and a given email
    /// must look like an address
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(MoodlogError::Validation(
                "Please enter your name.".to_string(),
            ));
        }

        if !self.email.is_empty() && !email_regex().is_match(&self.email) {
            return Err(MoodlogError::Validation(format!(
                "Invalid email address: '{}'",
                self.email
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, email: &str) -> UserProfile {
        UserProfile {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_requires_name() {
        assert!(profile("   ", "").validate().is_err());
        assert!(profile("Ada", "").validate().is_ok());
    }

    #[test]
    fn test_validate_email_shape() {
        assert!(profile("Ada", "ada@example.com").validate().is_ok());
        assert!(profile("Ada", "ada@example").validate().is_err());
        assert!(profile("Ada", "ada example@x.io").validate().is_err());
    }

    #[test]
    fn test_camel_case_wire_format() {
        let mut p = profile("Ada", "ada@example.com");
        p.reminder_enabled = true;
        p.theme = Theme::Dark;
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"reminderEnabled\":true"));
        assert!(json.contains("\"theme\":\"dark\""));
        assert!(json.contains("\"dailyQuote\":\"\""));
    }

    #[test]
    fn test_older_profile_without_bio_loads() {
        let json = r#"{"name":"Ada","email":"","reminderEnabled":false,"theme":"light"}"#;
        let p: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.theme, Theme::Light);
        assert_eq!(p.bio, "");
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!(Theme::from_str("Dark").unwrap(), Theme::Dark);
        assert!(Theme::from_str("sepia").is_err());
    }
}
