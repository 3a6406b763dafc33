//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{blossom_cmd, diary_cmd, init_diary};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    blossom_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized blossom diary"));

    assert!(temp.path().join(".blossom").is_dir());

    let content = fs::read_to_string(temp.path().join(".blossom/config.toml")).unwrap();
    assert!(content.contains("autosave_delay_ms = 2000"));
    assert!(content.contains("timestamp_format"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    init_diary(temp.path());
    blossom_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_command_outside_diary_fails() {
    let temp = TempDir::new().unwrap();

    diary_cmd(temp.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("blossom init"));
}

#[test]
fn test_blossom_root_env() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    init_diary(temp.path());

    blossom_cmd()
        .current_dir(elsewhere.path())
        .env("BLOSSOM_ROOT", temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet"));
}

#[test]
fn test_config_get_and_set() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    diary_cmd(temp.path())
        .arg("config")
        .arg("autosave_delay_ms")
        .assert()
        .success()
        .stdout(predicate::str::contains("2000"));

    diary_cmd(temp.path())
        .arg("config")
        .arg("autosave_delay_ms")
        .arg("500")
        .assert()
        .success();

    diary_cmd(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("autosave_delay_ms = 500"))
        .stdout(predicate::str::contains("created"));
}

#[test]
fn test_config_created_is_read_only() {
    let temp = TempDir::new().unwrap();
    init_diary(temp.path());

    diary_cmd(temp.path())
        .arg("config")
        .arg("created")
        .arg("2020-01-01T00:00:00Z")
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}
