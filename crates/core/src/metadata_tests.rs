// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

const DOCUMENT: &str = r#"{
    "status_types": { "0": "Unfinished", "2": "Open", "4": "Resolved", "5": "Paused" },
    "resolved_status": 4,
    "countries": [{ "id": "fr", "name": "France" }, { "id": "jp", "name": "Japan" }],
    "sectors": [{ "id": "s1", "name": "Aerospace" }, { "id": "s2", "name": "Chemicals" }]
}"#;

struct CountingSource {
    calls: AtomicUsize,
    fail_first: bool,
}

impl CountingSource {
    fn new(fail_first: bool) -> Self {
        CountingSource {
            calls: AtomicUsize::new(0),
            fail_first,
        }
    }
}

impl MetadataSource for CountingSource {
    fn fetch(&self) -> Result<Metadata> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_first && call == 0 {
            return Err(Error::MetadataUnavailable("service down".into()));
        }
        Metadata::from_json(DOCUMENT)
    }
}

#[test]
fn from_json_reads_statuses() {
    let metadata = Metadata::from_json(DOCUMENT).unwrap();
    assert_eq!(metadata.statuses.resolved(), StatusCode::new(4));
    assert_eq!(metadata.statuses.label(StatusCode::new(5)), Some("Paused"));
    assert_eq!(metadata.statuses.codes().count(), 4);
}

#[test]
fn from_json_rejects_bad_status_key() {
    let err = Metadata::from_json(r#"{ "status_types": { "x": "Open" }, "resolved_status": 4 }"#)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidStatusCode(_)));
}

#[test]
fn from_json_requires_resolved_status() {
    let err = Metadata::from_json(r#"{ "status_types": {} }"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn country_and_sector_lookups() {
    let metadata = Metadata::from_json(DOCUMENT).unwrap();
    assert_eq!(metadata.country_name("fr"), Some("France"));
    assert_eq!(metadata.country_name("xx"), None);
    assert_eq!(
        metadata.sector_names(&["s2", "missing", "s1"]),
        vec!["Chemicals", "Aerospace"]
    );
}

#[test]
fn cache_fetches_once() {
    let cache = MetadataCache::new(CountingSource::new(false));
    assert!(!cache.is_loaded());

    let first = cache.get().unwrap();
    let second = cache.get().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.source.calls.load(Ordering::SeqCst), 1);
    assert!(cache.is_loaded());
}

#[test]
fn cache_retries_after_failure() {
    let cache = MetadataCache::new(CountingSource::new(true));

    assert!(cache.get().is_err());
    assert!(!cache.is_loaded());
    assert!(cache.get().is_ok());
    assert_eq!(cache.source.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn cache_is_shared_across_threads() {
    let cache = Arc::new(MetadataCache::new(CountingSource::new(false)));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || cache.get().unwrap().statuses.resolved())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), StatusCode::new(4));
    }
    assert!(cache.is_loaded());
}

#[test]
fn json_file_source_reads_document() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("metadata.json");
    fs::write(&path, DOCUMENT).unwrap();

    let metadata = JsonFileSource::new(&path).fetch().unwrap();
    assert_eq!(metadata.country_name("jp"), Some("Japan"));
}

#[test]
fn json_file_source_missing_file() {
    let temp = TempDir::new().unwrap();
    let source = JsonFileSource::new(temp.path().join("absent.json"));
    assert!(matches!(
        source.fetch().unwrap_err(),
        Error::MetadataUnavailable(_)
    ));
}
