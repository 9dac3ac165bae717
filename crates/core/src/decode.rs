// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decoding of backend JSON into timeline input records.
//!
//! The backend hands over loosely shaped JSON. Anything that is not a list
//! of objects is rejected as [`Error::InvalidInput`], and a record without
//! its sort timestamp is reported as [`Error::MissingDate`] rather than
//! being given a default.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::history::StatusHistoryEntry;
use crate::note::Note;
use crate::status::StatusMetadata;
use crate::timeline::{merge, TimelineItem};

/// Decode the `notes` collection of a case.
pub fn decode_notes(value: &Value) -> Result<Vec<Note>> {
    decode_records(value, "note", "created_on")
}

/// Decode the `status_history` collection of a case.
pub fn decode_status_history(value: &Value) -> Result<Vec<StatusHistoryEntry>> {
    decode_records(value, "status history entry", "date")
}

/// Decode a backend case document holding both collections.
///
/// A case without a `notes` or `status_history` key has none of that kind.
pub fn decode_case(value: &Value) -> Result<(Vec<Note>, Vec<StatusHistoryEntry>)> {
    let case = value
        .as_object()
        .ok_or_else(|| Error::InvalidInput(format!("case must be an object, got {}", kind_of(value))))?;

    let notes = match case.get("notes") {
        Some(notes) => decode_notes(notes)?,
        None => Vec::new(),
    };
    let history = match case.get("status_history") {
        Some(history) => decode_status_history(history)?,
        None => Vec::new(),
    };
    Ok((notes, history))
}

/// Decode both collections and merge them into a timeline.
pub fn merge_json(
    notes: &Value,
    history: &Value,
    editing_id: Option<&str>,
    statuses: &StatusMetadata,
) -> Result<Vec<TimelineItem>> {
    let notes = decode_notes(notes)?;
    let history = decode_status_history(history)?;
    Ok(merge(&notes, &history, editing_id, statuses))
}

fn decode_records<T: DeserializeOwned>(
    value: &Value,
    kind: &'static str,
    date_field: &'static str,
) -> Result<Vec<T>> {
    let records = value.as_array().ok_or_else(|| {
        Error::InvalidInput(format!("expected a list of {kind} records, got {}", kind_of(value)))
    })?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let fields = record.as_object().ok_or_else(|| {
                Error::InvalidInput(format!(
                    "{kind} at index {index} must be an object, got {}",
                    kind_of(record)
                ))
            })?;
            if matches!(fields.get(date_field), None | Some(Value::Null)) {
                return Err(Error::MissingDate {
                    kind,
                    field: date_field,
                    index,
                });
            }
            T::deserialize(record)
                .map_err(|e| Error::InvalidInput(format!("{kind} at index {index}: {e}")))
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
