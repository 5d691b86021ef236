#![allow(deprecated)]

mod common;

use common::{add_entry, init_journal, moodlog_cmd};
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

fn insights_json(root: &Path, range: &str) -> Value {
    let output = moodlog_cmd()
        .current_dir(root)
        .args(["insights", "--range", range, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_insights_counts_moods() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    for (i, mood) in ["positive", "positive", "positive", "neutral", "neutral", "negative"]
        .iter()
        .enumerate()
    {
        let at = format!("2025-01-1{}T09:00:00Z", i);
        add_entry(temp.path(), "Day", "Walked", mood, &at);
    }

    let report = insights_json(temp.path(), "all");
    assert_eq!(report["positiveCount"], 3);
    assert_eq!(report["neutralCount"], 2);
    assert_eq!(report["negativeCount"], 1);
    assert_eq!(report["moodTrend"].as_array().unwrap().len(), 6);
}

#[test]
fn test_insights_common_words() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    add_entry(
        temp.path(),
        "One",
        "I love sunny mornings",
        "positive",
        "2025-01-16T09:00:00Z",
    );
    add_entry(
        temp.path(),
        "Two",
        "Love the sunny park, truly!",
        "positive",
        "2025-01-17T09:00:00Z",
    );

    let report = insights_json(temp.path(), "all");
    let words = report["commonWords"].as_array().unwrap();
    assert_eq!(words[0]["word"], "love");
    assert_eq!(words[0]["count"], 2);
    assert_eq!(words[1]["word"], "sunny");
    assert_eq!(words[1]["count"], 2);
    assert!(words.iter().all(|w| w["word"] != "the"));
}

#[test]
fn test_insights_trend_samples_seven_points() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    for day in 1..=10 {
        let at = format!("2025-03-{:02}T12:00:00Z", day);
        add_entry(temp.path(), "Day", "Notes", "neutral", &at);
    }

    let report = insights_json(temp.path(), "all");
    let trend = report["moodTrend"].as_array().unwrap();
    assert_eq!(trend.len(), 7);
    assert_eq!(trend[0]["label"], "03/01");
    assert_eq!(trend[6]["label"], "03/10");
    assert!(trend.iter().all(|p| p["value"] == 2));
}

#[test]
fn test_insights_range_filters_old_entries() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    add_entry(temp.path(), "Old", "Ancient", "negative", "2000-01-01T00:00:00Z");
    moodlog_cmd()
        .current_dir(temp.path())
        .args(["add", "-t", "Now", "-c", "Fresh", "-m", "positive"])
        .assert()
        .success();

    let week = insights_json(temp.path(), "7days");
    assert_eq!(week["positiveCount"], 1);
    assert_eq!(week["negativeCount"], 0);

    let all = insights_json(temp.path(), "all");
    assert_eq!(all["negativeCount"], 1);
}

#[test]
fn test_insights_text_report() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("insights")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries in range 30days"));

    add_entry(temp.path(), "One", "Garden", "positive", "2025-01-16T09:00:00Z");

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["insights", "-r", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood distribution"))
        .stdout(predicate::str::contains("01/16  ### 3"))
        .stdout(predicate::str::contains("garden"));
}

#[test]
fn test_insights_invalid_range() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["insights", "--range", "fortnight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range"));
}

#[test]
fn test_sentiment_command() {
    moodlog_cmd()
        .args(["sentiment", "I love this happy day"])
        .assert()
        .success()
        .stdout(predicate::str::diff("5\n"));

    moodlog_cmd()
        .args(["sentiment", "terrible awful sad day"])
        .assert()
        .success()
        .stdout(predicate::str::diff("-5\n"));

    moodlog_cmd()
        .args(["sentiment", "we walked to the station"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

fn seed_entries(root: &Path, blob: Value) {
    std::fs::write(
        root.join(".moodlog/journal_entries.json"),
        blob.to_string(),
    )
    .unwrap();
}

#[test]
fn test_insights_tolerates_null_fields() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    seed_entries(
        temp.path(),
        serde_json::json!([
            { "id": "1", "title": "Up", "content": "garden", "mood": "positive",
              "timestamp": "2025-01-16T09:00:00Z" },
            { "id": "2", "title": null, "content": null, "mood": null,
              "timestamp": "2025-01-17T09:00:00Z" }
        ]),
    );

    let report = insights_json(temp.path(), "all");
    assert_eq!(report["positiveCount"], 1);
    assert_eq!(report["moodTrend"].as_array().unwrap().len(), 2);
    assert_eq!(report["moodTrend"][1]["value"], 0);
}

#[test]
fn test_insights_reports_malformed_record() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    seed_entries(
        temp.path(),
        serde_json::json!([
            { "id": "1", "title": "Up", "content": "garden", "mood": "positive",
              "timestamp": "2025-01-16T09:00:00Z" },
            { "id": "2", "title": "Odd", "content": 42, "mood": "negative",
              "timestamp": "2025-01-17T09:00:00Z" }
        ]),
    );

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["insights", "--range", "all", "--json"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Entry #1 is malformed"));

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Up"))
        .stdout(predicate::str::contains("Odd").not());
}
