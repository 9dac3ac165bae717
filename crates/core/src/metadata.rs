// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reference data from the metadata service.
//!
//! Metadata changes rarely, so callers fetch it once through a
//! [`MetadataCache`] they own and pass the resulting [`Metadata`] down
//! explicitly.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};
use crate::status::{StatusCode, StatusMetadata};

/// Immutable lookup tables used when rendering a case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub statuses: StatusMetadata,
    countries: BTreeMap<String, String>,
    sectors: BTreeMap<String, String>,
}

impl Metadata {
    pub fn new(statuses: StatusMetadata) -> Self {
        Metadata {
            statuses,
            countries: BTreeMap::new(),
            sectors: BTreeMap::new(),
        }
    }

    /// Parse the JSON document served by the metadata service.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: MetadataDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    fn from_document(document: MetadataDocument) -> Result<Self> {
        let labels = document
            .status_types
            .into_iter()
            .map(|(code, label)| code.parse::<StatusCode>().map(|code| (code, label)))
            .collect::<Result<BTreeMap<_, _>>>()?;

        if !labels.contains_key(&document.resolved_status) {
            tracing::warn!(
                code = %document.resolved_status,
                "resolved status has no label in status_types"
            );
        }

        Ok(Metadata {
            statuses: StatusMetadata::new(labels, document.resolved_status),
            countries: named_lookup(document.countries),
            sectors: named_lookup(document.sectors),
        })
    }

    pub fn country_name(&self, id: &str) -> Option<&str> {
        self.countries.get(id).map(String::as_str)
    }

    /// Names of the given sectors, skipping ids the service does not know.
    pub fn sector_names<'a>(&'a self, ids: &[&str]) -> Vec<&'a str> {
        ids.iter()
            .filter_map(|id| self.sectors.get(*id).map(String::as_str))
            .collect()
    }
}

#[derive(Deserialize)]
struct MetadataDocument {
    status_types: BTreeMap<String, String>,
    resolved_status: StatusCode,
    #[serde(default)]
    countries: Vec<NamedRef>,
    #[serde(default)]
    sectors: Vec<NamedRef>,
}

#[derive(Deserialize)]
struct NamedRef {
    id: String,
    name: String,
}

fn named_lookup(refs: Vec<NamedRef>) -> BTreeMap<String, String> {
    refs.into_iter().map(|r| (r.id, r.name)).collect()
}

/// Where metadata comes from.
pub trait MetadataSource {
    fn fetch(&self) -> Result<Metadata>;
}

/// Reads the metadata document from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MetadataSource for JsonFileSource {
    fn fetch(&self) -> Result<Metadata> {
        let json = fs::read_to_string(&self.path).map_err(|e| {
            Error::MetadataUnavailable(format!("cannot read {}: {e}", self.path.display()))
        })?;
        tracing::debug!(path = %self.path.display(), "loaded metadata document");
        Metadata::from_json(&json)
    }
}

/// Fetch-once holder for [`Metadata`].
///
/// The first successful [`get`](Self::get) stores the result; later calls
/// share it. A failed fetch is not cached, so the next call tries again.
#[derive(Debug)]
pub struct MetadataCache<S> {
    source: S,
    cached: OnceLock<Arc<Metadata>>,
}

impl<S: MetadataSource> MetadataCache<S> {
    pub fn new(source: S) -> Self {
        MetadataCache {
            source,
            cached: OnceLock::new(),
        }
    }

    pub fn get(&self) -> Result<Arc<Metadata>> {
        if let Some(metadata) = self.cached.get() {
            return Ok(Arc::clone(metadata));
        }

        let fetched = self.source.fetch().inspect_err(|e| {
            tracing::warn!(error = %e, "metadata fetch failed");
        })?;
        // A concurrent caller may have filled the cell first; keep theirs.
        let metadata = self.cached.get_or_init(|| Arc::new(fetched));
        Ok(Arc::clone(metadata))
    }

    pub fn is_loaded(&self) -> bool {
        self.cached.get().is_some()
    }
}

#[cfg(test)]
#[path = "metadata_tests.rs"]
mod tests;
