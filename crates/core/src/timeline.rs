// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interaction timeline for a single case.
//!
//! Notes and status changes arrive from the backend as two separately
//! ordered collections. [`merge`] projects both into [`TimelineItem`]s and
//! orders them newest first, ready to hand to a template.
//!
//! The sort is stable: items with identical timestamps keep concatenation
//! order, so notes come before status changes and each stream keeps its
//! input order.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::history::StatusHistoryEntry;
use crate::note::{Actor, Document, Note, RecordId};
use crate::status::{StatusCode, StatusMetadata};

/// A note as it appears on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteItem {
    pub id: RecordId,
    /// True for the note the requesting user is currently editing.
    pub edit: bool,
    pub date: DateTime<Utc>,
    pub text: String,
    pub user: Option<Actor>,
    pub has_documents: bool,
    /// Always empty here; document details are rendered elsewhere.
    pub documents: Vec<Document>,
}

impl NoteItem {
    fn from_note(note: &Note, editing_id: Option<&str>) -> Self {
        NoteItem {
            id: note.id.clone(),
            edit: editing_id == Some(note.id.as_str()),
            date: note.created_on,
            text: note.text.clone(),
            user: note.created_by.clone(),
            has_documents: note.has_documents(),
            documents: Vec::new(),
        }
    }
}

/// The transition recorded by a status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusState {
    /// `None` when the case had no prior status.
    pub from: Option<StatusCode>,
    pub to: StatusCode,
    /// When the new status took effect.
    pub date: DateTime<Utc>,
    pub is_resolved: bool,
}

/// A status change as it appears on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusItem {
    pub date: DateTime<Utc>,
    pub event: String,
    pub state: StatusState,
    pub text: String,
    pub user: Option<Actor>,
}

impl StatusItem {
    fn from_entry(entry: &StatusHistoryEntry, statuses: &StatusMetadata) -> Self {
        StatusItem {
            date: entry.date,
            event: entry.event.clone(),
            state: StatusState {
                from: entry.old_status,
                to: entry.new_status,
                date: entry.status_date,
                is_resolved: statuses.is_resolved(entry.new_status),
            },
            text: entry.status_summary.clone(),
            user: entry.user.clone(),
        }
    }
}

/// One entry in a case timeline.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineItem {
    Note(NoteItem),
    Status(StatusItem),
}

impl TimelineItem {
    /// The timestamp the timeline is ordered by.
    pub fn date(&self) -> DateTime<Utc> {
        match self {
            TimelineItem::Note(note) => note.date,
            TimelineItem::Status(status) => status.date,
        }
    }

    pub fn as_note(&self) -> Option<&NoteItem> {
        match self {
            TimelineItem::Note(note) => Some(note),
            TimelineItem::Status(_) => None,
        }
    }

    pub fn as_status(&self) -> Option<&StatusItem> {
        match self {
            TimelineItem::Status(status) => Some(status),
            TimelineItem::Note(_) => None,
        }
    }

    /// Returns true for the note currently being edited.
    pub fn is_editing(&self) -> bool {
        self.as_note().is_some_and(|note| note.edit)
    }
}

// Templates branch on `isNote` / `isStatus`, so each variant carries its
// own literal flag instead of a shared tag field.
impl Serialize for TimelineItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Flagged<'a, T> {
            #[serde(skip_serializing_if = "Option::is_none")]
            is_note: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_status: Option<bool>,
            #[serde(flatten)]
            item: &'a T,
        }

        match self {
            TimelineItem::Note(item) => Flagged {
                is_note: Some(true),
                is_status: None,
                item,
            }
            .serialize(serializer),
            TimelineItem::Status(item) => Flagged {
                is_note: None,
                is_status: Some(true),
                item,
            }
            .serialize(serializer),
        }
    }
}

/// Merge a case's notes and status history into one timeline, newest first.
///
/// `editing_id` marks the note the requesting user has open for editing;
/// it is compared with each note id by string value. The output always has
/// `notes.len() + history.len()` items.
pub fn merge(
    notes: &[Note],
    history: &[StatusHistoryEntry],
    editing_id: Option<&str>,
    statuses: &StatusMetadata,
) -> Vec<TimelineItem> {
    let mut items = Vec::with_capacity(notes.len() + history.len());
    items.extend(
        notes
            .iter()
            .map(|note| TimelineItem::Note(NoteItem::from_note(note, editing_id))),
    );
    items.extend(
        history
            .iter()
            .map(|entry| TimelineItem::Status(StatusItem::from_entry(entry, statuses))),
    );

    // sort_by is stable
    items.sort_by(|a, b| b.date().cmp(&a.date()));

    tracing::debug!(
        notes = notes.len(),
        status_changes = history.len(),
        editing = editing_id.is_some(),
        "merged case timeline"
    );
    items
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
