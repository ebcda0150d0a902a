use std::process::Command;

use tempdir::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_bili_emote_downloader");

#[test]
fn no_arguments_prints_usage_and_fails() {
    let cwd = TempDir::new("emote_cli").unwrap();

    let output = Command::new(BIN).current_dir(cwd.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("<IDS>"), "stderr was: {}", stderr);

    // Nothing was fetched, so nothing was written
    assert_eq!(std::fs::read_dir(cwd.path()).unwrap().count(), 0);
}

#[test]
fn two_arguments_print_usage_and_fail() {
    let cwd = TempDir::new("emote_cli").unwrap();

    let output = Command::new(BIN)
        .args(["7067", "1"])
        .current_dir(cwd.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
    assert_eq!(std::fs::read_dir(cwd.path()).unwrap().count(), 0);
}
