// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! btrs - command-line front end for case timelines.
//!
//! This crate provides the `barriers` CLI, which renders the merged notes and
//! status history of a reported trade barrier using [`bt_core`].
//!
//! # Main Components
//!
//! - [`Config`] - Configuration (metadata location, date format, wrapping)
//! - [`Cli`] / [`Command`] - Argument parsing
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//! use btrs::{run, Cli};
//!
//! let cli = Cli::parse();
//! run(cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat};
pub use commands::timeline::TimelineInput;
pub use config::Config;
pub use error::{Error, Result};

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref())?;

    match cli.command {
        Command::Timeline {
            case,
            notes,
            history,
            editing,
            metadata,
            output,
        } => {
            let input = match (case, notes, history) {
                (Some(case), _, _) => TimelineInput::Case(case),
                (None, Some(notes), Some(history)) => TimelineInput::Lists { notes, history },
                // clap enforces one of the two forms
                _ => {
                    return Err(Error::Core(bt_core::Error::InvalidInput(
                        "pass --case or both --notes and --history".to_string(),
                    )))
                }
            };
            commands::timeline::run(
                &config,
                &input,
                editing.as_deref(),
                metadata.as_deref(),
                output,
            )
        }
        Command::Statuses {
            metadata,
            selected,
            output,
        } => commands::statuses::run(&config, metadata.as_deref(), selected, output),
        Command::Config { output } => commands::config::run(&config, output),
    }
}
