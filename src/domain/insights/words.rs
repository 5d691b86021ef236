//! Common word extraction

use super::format::EntryFormatter;
use crate::domain::JournalEntry;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Most words reported
pub const MAX_COMMON_WORDS: usize = 20;

/// Tokens this short never count as words
const MIN_WORD_CHARS: usize = 4;

/// English function words excluded from the frequency table
pub const STOP_WORDS: [&str; 127] = [
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "should", "now",
];

/// Punctuation removed before tokenizing. Apostrophes, quotes, brackets,
/// question marks and the like are left in place.
fn punctuation_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[.,/#!$%^&*;:{}=\-_`~()]").unwrap())
}

/// A word and how often it appears across all entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Rank the most frequent meaningful words in entry contents.
///
/// Words with equal counts stay in the order they were first seen.
pub fn common_words(entries: &[JournalEntry], formatter: &dyn EntryFormatter) -> Vec<WordCount> {
    if entries.is_empty() {
        return Vec::new();
    }

    let text = entries
        .iter()
        .map(|e| e.content.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let text = formatter.lowercase(&text);
    let text = punctuation_regex().replace_all(&text, "");

    let mut counts: Vec<WordCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for token in text.split_whitespace() {
        if token.chars().count() < MIN_WORD_CHARS || is_stop_word(token) {
            continue;
        }

        match positions.get(token) {
            Some(&i) => counts[i].count += 1,
            None => {
                positions.insert(token, counts.len());
                counts.push(WordCount {
                    word: token.to_string(),
                    count: 1,
                });
            }
        }
    }

    // stable: equal counts keep first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(MAX_COMMON_WORDS);
    counts
}
