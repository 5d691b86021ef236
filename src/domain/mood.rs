//! Mood tags attached to journal entries

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Emotional tag chosen by the entry author.
///
/// Stored records may carry a tag this version does not know about; those are
/// kept as `Unrecognized` so they round-trip and count towards no mood.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mood {
    Positive,
    Neutral,
    Negative,
    Unrecognized(String),
}

impl Mood {
    /// Map a stored tag to a mood without ever failing
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "positive" => Mood::Positive,
            "neutral" => Mood::Neutral,
            "negative" => Mood::Negative,
            other => Mood::Unrecognized(other.to_string()),
        }
    }

    /// Value used by the mood trend chart
    pub fn trend_value(&self) -> u8 {
        match self {
            Mood::Positive => 3,
            Mood::Neutral => 2,
            Mood::Negative => 1,
            Mood::Unrecognized(_) => 0,
        }
    }

    /// Tag as written to storage
    pub fn as_tag(&self) -> &str {
        match self {
            Mood::Positive => "positive",
            Mood::Neutral => "neutral",
            Mood::Negative => "negative",
            Mood::Unrecognized(tag) => tag,
        }
    }

    /// Single-character marker for calendar output
    pub fn marker(&self) -> char {
        match self {
            Mood::Positive => '+',
            Mood::Neutral => '~',
            Mood::Negative => '-',
            Mood::Unrecognized(_) => '?',
        }
    }

    pub(crate) fn missing() -> Self {
        Mood::Unrecognized(String::new())
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Strict parsing for user input; only the three known moods are accepted.
impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Mood::from_tag(&s.trim().to_lowercase()) {
            Mood::Unrecognized(_) => Err(format!(
                "Invalid mood: '{}'. Valid moods are: positive, neutral, negative",
                s
            )),
            mood => Ok(mood),
        }
    }
}

impl Serialize for Mood {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for Mood {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = Option::<String>::deserialize(deserializer)?;
        Ok(tag.map_or_else(Mood::missing, |tag| Mood::from_tag(&tag)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_values() {
        assert_eq!(Mood::Positive.trend_value(), 3);
        assert_eq!(Mood::Neutral.trend_value(), 2);
        assert_eq!(Mood::Negative.trend_value(), 1);
        assert_eq!(Mood::Unrecognized("ecstatic".into()).trend_value(), 0);
    }

    #[test]
    fn test_from_tag_is_case_sensitive() {
        assert_eq!(Mood::from_tag("positive"), Mood::Positive);
        assert_eq!(
            Mood::from_tag("Positive"),
            Mood::Unrecognized("Positive".to_string())
        );
    }

    #[test]
    fn test_from_str_accepts_known_moods() {
        assert_eq!(Mood::from_str("positive").unwrap(), Mood::Positive);
        assert_eq!(Mood::from_str("NEUTRAL").unwrap(), Mood::Neutral);
        assert_eq!(Mood::from_str(" negative ").unwrap(), Mood::Negative);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = Mood::from_str("meh").unwrap_err();
        assert!(err.contains("Invalid mood"));
    }

    #[test]
    fn test_serde_keeps_unknown_tag() {
        let mood: Mood = serde_json::from_str("\"ecstatic\"").unwrap();
        assert_eq!(mood, Mood::Unrecognized("ecstatic".to_string()));
        assert_eq!(serde_json::to_string(&mood).unwrap(), "\"ecstatic\"");
    }

    #[test]
    fn test_serde_null_is_missing() {
        let mood: Mood = serde_json::from_str("null").unwrap();
        assert_eq!(mood, Mood::missing());
        assert_eq!(mood.trend_value(), 0);
    }

    #[test]
    fn test_serde_rejects_non_string() {
        assert!(serde_json::from_str::<Mood>("3").is_err());
    }
}
