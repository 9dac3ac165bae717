// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use bt_core::{status_choices, Choice, StatusCode, StatusMetadata};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::format_choice;
use crate::error::Result;

use super::metadata_cache;

pub fn run(
    config: &Config,
    metadata: Option<&Path>,
    selected: Option<u32>,
    output: OutputFormat,
) -> Result<()> {
    let cache = metadata_cache(config, metadata)?;
    let metadata = cache.get()?;
    println!("{}", render(&metadata.statuses, selected, output)?);
    Ok(())
}

pub(crate) fn render(
    statuses: &StatusMetadata,
    selected: Option<u32>,
    output: OutputFormat,
) -> Result<String> {
    let choices: Vec<Choice> = status_choices(statuses, selected.map(StatusCode::new));
    match output {
        OutputFormat::Text => {
            if choices.is_empty() {
                return Ok("No statuses defined.".to_string());
            }
            Ok(choices
                .iter()
                .map(format_choice)
                .collect::<Vec<_>>()
                .join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&choices)?),
    }
}

#[cfg(test)]
#[path = "statuses_tests.rs"]
mod tests;
