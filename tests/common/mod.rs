use assert_cmd::Command;
use std::path::Path;

pub fn moodlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodlog").unwrap();
    cmd.env_remove("MOODLOG_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// `moodlog init` a journal at `root` and pin its timezone to UTC
pub fn init_journal(root: &Path) {
    moodlog_cmd().arg("init").arg(root).assert().success();
    moodlog_cmd()
        .current_dir(root)
        .args(["config", "timezone", "utc"])
        .assert()
        .success();
}

/// Add an entry and return the id printed by the command
#[allow(dead_code)]
pub fn add_entry(root: &Path, title: &str, content: &str, mood: &str, at: &str) -> String {
    let output = moodlog_cmd()
        .current_dir(root)
        .args([
            "add", "--title", title, "--content", content, "--mood", mood, "--at", at,
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}
