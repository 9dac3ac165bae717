// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod statuses;
pub mod timeline;

use std::fs;
use std::path::Path;

use bt_core::{JsonFileSource, MetadataCache};
use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};

/// Read and parse a JSON input file.
pub fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| Error::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the metadata cache for the configured (or overridden) document.
pub fn metadata_cache(
    config: &Config,
    flag: Option<&Path>,
) -> Result<MetadataCache<JsonFileSource>> {
    let path = config.metadata_path(flag)?;
    Ok(MetadataCache::new(JsonFileSource::new(path)))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
