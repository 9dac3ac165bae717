// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Notes attached to a case, as returned by the backend service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque record identifier.
///
/// The backend emits some ids as integers and others as strings; both are
/// kept in their string form so comparisons happen by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> String {
        id.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Integer(i64),
    Text(String),
}

impl From<RawId> for RecordId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Integer(n) => RecordId(n.to_string()),
            RawId::Text(s) => RecordId(s),
        }
    }
}

/// The user who authored a note or changed a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
}

impl Actor {
    pub fn named(name: impl Into<String>) -> Self {
        Actor {
            id: None,
            name: name.into(),
        }
    }
}

/// A document uploaded alongside a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A free-text comment on a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: RecordId,
    /// When the note was written. This is the timeline sort key.
    pub created_on: DateTime<Utc>,
    #[serde(default)]
    pub created_by: Option<Actor>,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<Document>>,
}

impl Note {
    pub fn new(id: impl Into<String>, created_on: DateTime<Utc>, text: impl Into<String>) -> Self {
        Note {
            id: RecordId::new(id),
            created_on,
            created_by: None,
            text: text.into(),
            documents: None,
        }
    }

    /// Sets the author (builder pattern).
    pub fn with_author(mut self, actor: Actor) -> Self {
        self.created_by = Some(actor);
        self
    }

    /// Sets the attached documents (builder pattern).
    pub fn with_documents(mut self, documents: Vec<Document>) -> Self {
        self.documents = Some(documents);
        self
    }

    pub fn has_documents(&self) -> bool {
        self.documents.as_ref().is_some_and(|docs| !docs.is_empty())
    }
}

#[cfg(test)]
#[path = "note_tests.rs"]
mod tests;
