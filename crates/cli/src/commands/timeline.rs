// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use bt_core::{decode_case, decode_notes, decode_status_history, merge, StatusMetadata, TimelineItem};

use crate::cli::OutputFormat;
use crate::colors;
use crate::config::Config;
use crate::display::{format_timeline, DisplayOptions};
use crate::error::Result;

use super::{metadata_cache, read_json};

/// Where the case data comes from.
#[derive(Debug, Clone)]
pub enum TimelineInput {
    /// A case document with `notes` and `status_history` keys.
    Case(PathBuf),
    /// Separate exported lists.
    Lists { notes: PathBuf, history: PathBuf },
}

pub fn run(
    config: &Config,
    input: &TimelineInput,
    editing: Option<&str>,
    metadata: Option<&Path>,
    output: OutputFormat,
) -> Result<()> {
    let cache = metadata_cache(config, metadata)?;
    let metadata = cache.get()?;
    let items = build(input, editing, &metadata.statuses)?;
    let opts = DisplayOptions::from_config(config, colors::should_colorize());
    println!("{}", render(&items, &metadata.statuses, &opts, output)?);
    Ok(())
}

/// Decode the input files and merge them into a timeline.
pub(crate) fn build(
    input: &TimelineInput,
    editing: Option<&str>,
    statuses: &StatusMetadata,
) -> Result<Vec<TimelineItem>> {
    let (notes, history) = match input {
        TimelineInput::Case(path) => decode_case(&read_json(path)?)?,
        TimelineInput::Lists { notes, history } => (
            decode_notes(&read_json(notes)?)?,
            decode_status_history(&read_json(history)?)?,
        ),
    };
    tracing::debug!(notes = notes.len(), history = history.len(), "decoded case input");
    Ok(merge(&notes, &history, editing, statuses))
}

pub(crate) fn render(
    items: &[TimelineItem],
    statuses: &StatusMetadata,
    opts: &DisplayOptions,
    output: OutputFormat,
) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(format_timeline(items, statuses, opts)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
    }
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
