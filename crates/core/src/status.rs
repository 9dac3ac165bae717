// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Case status codes and their labels.
//!
//! The backend reports statuses as small integers, sometimes encoded as
//! strings. Labels and the distinguished "Resolved" code come from the
//! metadata service, never from this crate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A case status code as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCode", into = "u32")]
pub struct StatusCode(u32);

impl StatusCode {
    pub const fn new(code: u32) -> Self {
        StatusCode(code)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<StatusCode> for u32 {
    fn from(code: StatusCode) -> u32 {
        code.0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StatusCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u32>()
            .map(StatusCode)
            .map_err(|_| Error::InvalidStatusCode(s.to_string()))
    }
}

/// Wire form of a status code: `2` and `"2"` are both accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCode {
    Number(u32),
    Text(String),
}

impl TryFrom<RawCode> for StatusCode {
    type Error = Error;

    fn try_from(raw: RawCode) -> Result<Self> {
        match raw {
            RawCode::Number(n) => Ok(StatusCode(n)),
            RawCode::Text(s) => s.parse(),
        }
    }
}

/// Human labels for status codes plus the code that means "Resolved".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMetadata {
    labels: BTreeMap<StatusCode, String>,
    resolved: StatusCode,
}

impl StatusMetadata {
    pub fn new(labels: BTreeMap<StatusCode, String>, resolved: StatusCode) -> Self {
        StatusMetadata { labels, resolved }
    }

    /// The code the metadata service designates as "Resolved".
    pub fn resolved(&self) -> StatusCode {
        self.resolved
    }

    /// Returns true if `code` is the Resolved code.
    pub fn is_resolved(&self, code: StatusCode) -> bool {
        code == self.resolved
    }

    pub fn label(&self, code: StatusCode) -> Option<&str> {
        self.labels.get(&code).map(String::as_str)
    }

    /// Label for display, falling back to the bare code when unknown.
    pub fn label_or_code(&self, code: StatusCode) -> String {
        match self.label(code) {
            Some(label) => label.to_string(),
            None => code.to_string(),
        }
    }

    /// All known codes with their labels, in ascending code order.
    pub fn codes(&self) -> impl Iterator<Item = (StatusCode, &str)> {
        self.labels.iter().map(|(code, label)| (*code, label.as_str()))
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
