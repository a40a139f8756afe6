// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! End-to-end tests for the `rockets` binary.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn rockets(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rockets").expect("binary built");
    cmd.env_remove("RUST_LOG")
        .env_remove("SPACE_ROCKETS_STORAGE_KEY")
        .env("SPACE_ROCKETS_DATA_DIR", dir);
    cmd
}

#[test]
fn add_then_list_json_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    rockets(dir.path())
        .args(["add", "launches", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added launches/123"));
    rockets(dir.path()).args(["add", "pads", "456"]).assert().success();

    let out = rockets(dir.path())
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"launches": ["123"], "pads": ["456"], "rockets": []})
    );
}

#[test]
fn list_json_keeps_unknown_snapshot_keys() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("space_rockets_favorites.json"),
        br#"{"launches": ["1"], "pads": [], "rockets": [], "ships": ["asog"]}"#,
    )
    .unwrap();
    let out = rockets(dir.path())
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"launches": ["1"], "pads": [], "rockets": [], "ships": ["asog"]})
    );
}

#[test]
fn invalid_category_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    rockets(dir.path())
        .args(["add", "invalid_type", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown favorites category"));
    assert!(!dir.path().join("space_rockets_favorites.json").exists());
}

#[test]
fn empty_list_prints_hint() {
    let dir = tempfile::tempdir().unwrap();
    rockets(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet"));
}

#[test]
fn toggle_flips_and_clear_empties() {
    let dir = tempfile::tempdir().unwrap();
    rockets(dir.path())
        .args(["toggle", "rockets", "falcon9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added rockets/falcon9"));
    rockets(dir.path())
        .args(["toggle", "rockets", "falcon9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed rockets/falcon9"));
    rockets(dir.path()).args(["add", "pads", "ksc"]).assert().success();
    rockets(dir.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("cleared all"));
    rockets(dir.path())
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("No favorites yet"));
}

#[test]
fn malformed_snapshot_lists_empty_and_warns() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("space_rockets_favorites.json"),
        br#"{"notValid": true}"#,
    )
    .unwrap();
    rockets(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet"))
        .stderr(predicate::str::contains("failed to initialize favorites"));
}

#[test]
fn path_honors_storage_key() {
    let dir = tempfile::tempdir().unwrap();
    rockets(dir.path())
        .args(["--key", "alt", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alt.json"));
}
