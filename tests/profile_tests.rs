#![allow(deprecated)]

mod common;

use common::{init_journal, moodlog_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_profile_defaults() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("name = (not set)"))
        .stdout(predicate::str::contains("reminders = off"))
        .stdout(predicate::str::contains("theme = system"));
}

#[test]
fn test_profile_update_persists() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_cmd()
        .current_dir(temp.path())
        .args([
            "profile",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--reminders",
            "on",
            "--theme",
            "dark",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("name = Ada"));

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("email = ada@example.com"))
        .stdout(predicate::str::contains("reminders = on"))
        .stdout(predicate::str::contains("theme = dark"));

    let stored = std::fs::read_to_string(temp.path().join(".moodlog/user_profile.json")).unwrap();
    assert!(stored.contains("\"reminderEnabled\":true"));
}

#[test]
fn test_profile_requires_name() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["profile", "--bio", "Just me"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Please enter your name."));
}

#[test]
fn test_profile_rejects_bad_email() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["profile", "--name", "Ada", "--email", "not-an-email"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid email address"));
}
