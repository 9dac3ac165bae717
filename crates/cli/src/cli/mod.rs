// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "barriers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render the activity timeline of a reported trade barrier")]
#[command(
    long_about = "Render the activity timeline of a reported trade barrier.\n\n\
    Merges a case's notes and status history, as exported from the backend service, \
    into one feed with the most recent activity first."
)]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Read configuration from <path> instead of searching for it
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the merged notes and status history of a case
    #[command(after_help = colors::examples("\
Examples:
  barriers timeline --case case.json                 Case document with both lists
  barriers timeline --notes n.json --history h.json  Separate exported lists
  barriers timeline --case case.json --editing 17    Mark note 17 as being edited
  barriers timeline --case case.json -o json         Output template JSON"))]
    Timeline {
        /// Case document containing `notes` and `status_history`
        #[arg(long, value_name = "file", conflicts_with_all = ["notes", "history"])]
        case: Option<PathBuf>,

        /// JSON list of notes
        #[arg(long, value_name = "file", requires = "history", required_unless_present = "case")]
        notes: Option<PathBuf>,

        /// JSON list of status history entries
        #[arg(long, value_name = "file", requires = "notes")]
        history: Option<PathBuf>,

        /// Id of the note currently being edited
        #[arg(long, value_name = "id")]
        editing: Option<String>,

        /// Metadata document (overrides config)
        #[arg(long, value_name = "file")]
        metadata: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List the case statuses defined by the metadata
    Statuses {
        /// Metadata document (overrides config)
        #[arg(long, value_name = "file")]
        metadata: Option<PathBuf>,

        /// Status code to show as selected
        #[arg(long, value_name = "code")]
        selected: Option<u32>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the active configuration
    Config {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
