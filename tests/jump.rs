#![allow(deprecated)]

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;

fn bm(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bm").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.join("config"))
        .env_remove("BM_STORE")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_jump_unknown_name() {
    let temp = assert_fs::TempDir::new().unwrap();

    bm(temp.path())
        .args(["jump", "nowhere"])
        .assert()
        .success()
        .stderr(predicate::str::contains("nowhere does not exist"));

    // Nothing written
    temp.child("config/bm/bookmarks.json")
        .assert(predicate::path::missing());
}

#[cfg(unix)]
#[test]
fn test_jump_launches_configured_terminal() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("proj").create_dir_all().unwrap();
    // `true` accepts and ignores the terminal arguments
    temp.child("config/bm/config.toml")
        .write_str("[jump]\nterminal = \"true\"\nshell = \"sh\"\n")
        .unwrap();

    bm(temp.path())
        .args(["add", "proj"])
        .arg(temp.child("proj").path())
        .assert()
        .success();

    bm(temp.path())
        .args(["jump", "proj"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Opening shell at"));
}

#[cfg(unix)]
#[test]
fn test_jump_spawn_failure_keeps_exit_status() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("proj").create_dir_all().unwrap();
    temp.child("config/bm/config.toml")
        .write_str("[jump]\nterminal = \"bm-test-missing-terminal\"\n")
        .unwrap();

    bm(temp.path())
        .args(["add", "proj"])
        .arg(temp.child("proj").path())
        .assert()
        .success();

    bm(temp.path())
        .args(["jump", "proj"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to open shell"));
}
