// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status-change history of a case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::note::Actor;
use crate::status::StatusCode;

/// One status transition, already paired with its predecessor by the
/// backend so that `old_status` and `new_status` are both present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    /// Backend event name (e.g. `"BARRIER_STATUS_CHANGE"`).
    pub event: String,
    /// When the change was recorded. This is the timeline sort key.
    pub date: DateTime<Utc>,
    /// When the new status took effect, as entered by the user.
    pub status_date: DateTime<Utc>,
    #[serde(default)]
    pub status_summary: String,
    #[serde(default)]
    pub user: Option<Actor>,
    /// `None` for the entry that created the case.
    #[serde(default)]
    pub old_status: Option<StatusCode>,
    pub new_status: StatusCode,
}

impl StatusHistoryEntry {
    /// Creates an entry whose effective date equals its recorded date.
    pub fn new(event: impl Into<String>, date: DateTime<Utc>, new_status: StatusCode) -> Self {
        StatusHistoryEntry {
            event: event.into(),
            date,
            status_date: date,
            status_summary: String::new(),
            user: None,
            old_status: None,
            new_status,
        }
    }

    /// Sets the prior status (builder pattern).
    pub fn with_old_status(mut self, old_status: StatusCode) -> Self {
        self.old_status = Some(old_status);
        self
    }

    /// Sets the summary text (builder pattern).
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.status_summary = summary.into();
        self
    }

    /// Sets the user who made the change (builder pattern).
    pub fn with_user(mut self, user: Actor) -> Self {
        self.user = Some(user);
        self
    }

    /// Sets the effective date (builder pattern).
    pub fn with_status_date(mut self, status_date: DateTime<Utc>) -> Self {
        self.status_date = status_date;
        self
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
