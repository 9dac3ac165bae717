// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! bt-core: case timeline library for the trade barrier tracker
//!
//! This crate turns the backend's notes and status history for a case into
//! a single render-ready timeline, and provides the metadata lookups and
//! form choices used alongside it.

pub mod choices;
pub mod decode;
pub mod error;
pub mod history;
pub mod metadata;
pub mod note;
pub mod status;
pub mod timeline;

pub use choices::{status_choices, Choice, Decorations};
pub use decode::{decode_case, decode_notes, decode_status_history, merge_json};
pub use error::{Error, Result};
pub use history::StatusHistoryEntry;
pub use metadata::{JsonFileSource, Metadata, MetadataCache, MetadataSource};
pub use note::{Actor, Document, Note, RecordId};
pub use status::{StatusCode, StatusMetadata};
pub use timeline::{merge, NoteItem, StatusItem, StatusState, TimelineItem};
