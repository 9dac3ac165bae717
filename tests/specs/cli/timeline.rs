// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `barriers timeline`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

fn json_output(home: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = barriers(home).args(args).output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn timeline_json_orders_fixture_newest_first() {
    let home = TempDir::new().unwrap();
    let case = fixture("case.json");
    let metadata = fixture("metadata.json");
    let value = json_output(
        &home,
        &[
            "timeline",
            "--case",
            case.to_str().unwrap(),
            "--metadata",
            metadata.to_str().unwrap(),
            "--editing",
            "103",
            "-o",
            "json",
        ],
    );

    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 10);

    let order: Vec<String> = items
        .iter()
        .map(|item| {
            if item["isNote"] == true {
                format!("note {}", item["id"].as_str().unwrap())
            } else {
                format!("status {}->{}", item["state"]["from"], item["state"]["to"])
            }
        })
        .collect();
    similar_asserts::assert_eq!(
        order,
        vec![
            "note 103",
            "note 104",
            "note 102",
            "status 4->2",
            "note 100",
            "status 2->5",
            "status 2->4",
            "note 101",
            "status 0->2",
            "status null->0",
        ]
    );

    let editing: Vec<&serde_json::Value> = items.iter().filter(|i| i["edit"] == true).collect();
    assert_eq!(editing.len(), 1);
    assert_eq!(editing[0]["id"], "103");

    let resolved: Vec<&serde_json::Value> = items
        .iter()
        .filter(|i| i["state"]["isResolved"] == true)
        .collect();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0]["state"]["to"], 4);
}

#[test]
fn timeline_separate_lists_match_case_document() {
    let home = TempDir::new().unwrap();
    let metadata = fixture("metadata.json");
    let from_case = json_output(
        &home,
        &[
            "timeline",
            "--case",
            fixture("case.json").to_str().unwrap(),
            "--metadata",
            metadata.to_str().unwrap(),
            "-o",
            "json",
        ],
    );
    let from_lists = json_output(
        &home,
        &[
            "timeline",
            "--notes",
            fixture("notes.json").to_str().unwrap(),
            "--history",
            fixture("history.json").to_str().unwrap(),
            "--metadata",
            metadata.to_str().unwrap(),
            "-o",
            "json",
        ],
    );
    assert_eq!(from_case, from_lists);
}

#[test]
fn timeline_text_output() {
    let home = TempDir::new().unwrap();
    barriers(&home)
        .args(["timeline", "--case"])
        .arg(fixture("case.json"))
        .arg("--metadata")
        .arg(fixture("metadata.json"))
        .args(["--editing", "103"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Timeline:"))
        .stdout(predicate::str::contains(
            "2019-03-10 12:00  note by Sam Smith [editing]",
        ))
        .stdout(predicate::str::contains(
            "status Open -> Resolved by Sam Smith [resolved]",
        ))
        .stdout(predicate::str::contains("(has documents)"));
}

#[test]
fn timeline_uses_metadata_from_config() {
    let home = TempDir::new().unwrap();
    std::fs::copy(fixture("metadata.json"), home.path().join("metadata.json")).unwrap();
    write_config(home.path(), "metadata = \"../metadata.json\"\n");

    barriers(&home)
        .args(["timeline", "--case"])
        .arg(fixture("case.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("status Unfinished by Ann Other"));
}

#[test]
fn timeline_without_metadata_fails() {
    let home = TempDir::new().unwrap();
    barriers(&home)
        .args(["timeline", "--case"])
        .arg(fixture("case.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: no metadata file configured"));
}

#[test]
fn timeline_empty_case() {
    let home = TempDir::new().unwrap();
    let case = home.path().join("case.json");
    std::fs::write(&case, r#"{ "id": "b", "notes": [], "status_history": [] }"#).unwrap();

    barriers(&home)
        .args(["timeline", "--case"])
        .arg(&case)
        .arg("--metadata")
        .arg(fixture("metadata.json"))
        .args(["-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn timeline_missing_date_is_reported() {
    let home = TempDir::new().unwrap();
    let notes = home.path().join("notes.json");
    let history = home.path().join("history.json");
    std::fs::write(&notes, "[]").unwrap();
    std::fs::write(
        &history,
        r#"[{ "event": "BARRIER_CREATED", "status_date": "2019-03-01T12:00:00Z", "new_status": 0 }]"#,
    )
    .unwrap();

    barriers(&home)
        .arg("timeline")
        .arg("--notes")
        .arg(&notes)
        .arg("--history")
        .arg(&history)
        .arg("--metadata")
        .arg(fixture("metadata.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("status history entry at index 0 has no date"));
}

#[test]
fn timeline_non_list_input_is_invalid() {
    let home = TempDir::new().unwrap();
    let case = home.path().join("case.json");
    std::fs::write(&case, r#"{ "notes": { "count": 0 } }"#).unwrap();

    barriers(&home)
        .args(["timeline", "--case"])
        .arg(&case)
        .arg("--metadata")
        .arg(fixture("metadata.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input"));
}
