// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for bt-core operations.

use thiserror::Error;

/// All possible errors that can occur in bt-core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An input collection or record does not have the expected shape.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A record has no timestamp to sort on.
    #[error("{kind} at index {index} has no {field}\n  hint: every timeline record needs a timestamp")]
    MissingDate {
        kind: &'static str,
        field: &'static str,
        index: usize,
    },

    #[error("invalid status code: '{0}'\n  hint: status codes are non-negative integers")]
    InvalidStatusCode(String),

    #[error("metadata unavailable: {0}")]
    MetadataUnavailable(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for bt-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
