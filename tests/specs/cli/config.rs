// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for configuration discovery.

#![allow(clippy::unwrap_used)]

mod common;

use common::*;

#[test]
fn config_defaults_without_file() {
    let home = TempDir::new().unwrap();
    barriers(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("source: (defaults)"))
        .stdout(predicate::str::contains("wrap_width: 96"));
}

#[test]
fn config_reads_local_file() {
    let home = TempDir::new().unwrap();
    write_config(home.path(), "wrap_width = 40\ndate_format = \"%d %b %Y\"\n");

    barriers(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("wrap_width: 40"))
        .stdout(predicate::str::contains("date_format: %d %b %Y"));
}

#[test]
fn config_explicit_path_via_env() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.toml");
    std::fs::write(&path, "wrap_width = 30\n").unwrap();

    barriers(&home)
        .env("BARRIERS_CONFIG", &path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("wrap_width: 30"));
}

#[test]
fn config_flag_missing_file_fails() {
    let home = TempDir::new().unwrap();
    barriers(&home)
        .args(["config", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn config_invalid_file_fails() {
    let home = TempDir::new().unwrap();
    write_config(home.path(), "wrap_width = \"wide\"\n");

    barriers(&home)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
