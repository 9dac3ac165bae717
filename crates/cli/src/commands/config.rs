// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;

/// Print the active configuration.
pub fn run(config: &Config, output: OutputFormat) -> Result<()> {
    println!("{}", render(config, output)?);
    Ok(())
}

pub(crate) fn render(config: &Config, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => {
            let source = config
                .source
                .as_ref()
                .map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string());
            let metadata = config
                .metadata
                .as_ref()
                .map_or_else(|| "(not set)".to_string(), |p| p.display().to_string());
            Ok(format!(
                "source: {}\nmetadata: {}\ndate_format: {}\nwrap_width: {}",
                source, metadata, config.date_format, config.wrap_width
            ))
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "source": config.source,
                "metadata": config.metadata,
                "date_format": config.date_format,
                "wrap_width": config.wrap_width,
            });
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
