// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `barriers statuses`.

#![allow(clippy::unwrap_used)]

mod common;

use common::*;

#[test]
fn statuses_text_lists_labels_in_code_order() {
    let home = TempDir::new().unwrap();
    barriers(&home)
        .arg("statuses")
        .arg("--metadata")
        .arg(fixture("metadata.json"))
        .args(["--selected", "2"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "( ) 0  Unfinished\n(x) 2  Open\n( ) 4  Resolved  - Closes the case\n( ) 5  Paused\n",
        ));
}

#[test]
fn statuses_json() {
    let home = TempDir::new().unwrap();
    let output = barriers(&home)
        .arg("statuses")
        .arg("--metadata")
        .arg(fixture("metadata.json"))
        .args(["-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let values: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["value"].as_str().unwrap())
        .collect();
    assert_eq!(values, vec!["0", "2", "4", "5"]);
}

#[test]
fn statuses_missing_metadata_file() {
    let home = TempDir::new().unwrap();
    barriers(&home)
        .args(["statuses", "--metadata", "absent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("metadata unavailable"));
}
