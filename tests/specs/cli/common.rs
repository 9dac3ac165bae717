// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Command isolated from any user or environment configuration.
pub fn barriers(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("barriers");
    cmd.env_remove("BARRIERS_CONFIG")
        .env_remove("BARRIERS_LOG")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("NO_COLOR", "1")
        .current_dir(home.path());
    cmd
}

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(name)
}

/// Write `.barriers/config.toml` in `dir`.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let config_dir = dir.join(".barriers");
    std::fs::create_dir_all(&config_dir).unwrap();
    let path = config_dir.join("config.toml");
    std::fs::write(&path, content).unwrap();
    path
}
