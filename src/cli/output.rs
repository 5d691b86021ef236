//! Output formatting utilities

use crate::domain::{DisplayZone, InsightReport, JournalEntry, Mood, UserProfile};
use crate::infrastructure::Quote;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Common words listed in the text report
const TEXT_REPORT_WORDS: usize = 10;

/// Format a list of entries for display
pub fn format_entry_list(entries: &[JournalEntry], zone: &DisplayZone) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {:<8}  {}  [{}]\n",
            zone.format(&entry.timestamp, "%Y-%m-%d %H:%M"),
            entry.mood.as_tag(),
            entry.title,
            entry.id
        ));
        for line in entry.content.lines() {
            output.push_str(&format!("    {}\n", line));
        }
    }
    output
}

/// Format calendar marks, one day per line
pub fn format_calendar(marks: &BTreeMap<NaiveDate, Mood>) -> String {
    if marks.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for (date, mood) in marks {
        output.push_str(&format!(
            "{}  {}  {}\n",
            date.format("%Y-%m-%d"),
            mood.marker(),
            mood.as_tag()
        ));
    }
    output
}

/// Format an insight report as plain text
pub fn format_insights(report: &InsightReport, range_label: &str) -> String {
    let total = report.positive_count + report.neutral_count + report.negative_count;
    if total == 0 && report.mood_trend.is_empty() {
        return format!("No entries in range {}", range_label);
    }

    let mut output = format!("Insights ({})\n\n", range_label);

    output.push_str("Mood distribution\n");
    output.push_str(&format!("  positive  {}\n", report.positive_count));
    output.push_str(&format!("  neutral   {}\n", report.neutral_count));
    output.push_str(&format!("  negative  {}\n", report.negative_count));

    output.push_str("\nMood over time\n");
    for point in &report.mood_trend {
        output.push_str(&format!(
            "  {}  {:<3} {}\n",
            point.label,
            "#".repeat(point.value as usize),
            point.value
        ));
    }

    if !report.common_words.is_empty() {
        output.push_str("\nCommon words\n");
        for word in report.common_words.iter().take(TEXT_REPORT_WORDS) {
            output.push_str(&format!("  {:<16} {}\n", word.word, word.count));
        }
    }

    output
}

pub fn format_profile(profile: &UserProfile) -> String {
    let or_unset = |value: &str| {
        if value.is_empty() {
            "(not set)".to_string()
        } else {
            value.to_string()
        }
    };

    format!(
        "name = {}\nemail = {}\nbio = {}\ndaily_quote = {}\nreminders = {}\ntheme = {}\n",
        or_unset(&profile.name),
        or_unset(&profile.email),
        or_unset(&profile.bio),
        or_unset(&profile.daily_quote),
        if profile.reminder_enabled { "on" } else { "off" },
        profile.theme
    )
}

pub fn format_quote(quote: &Quote) -> String {
    format!("\"{}\"\n    - {}", quote.text, quote.author)
}
