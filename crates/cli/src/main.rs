// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use btrs::env::vars;
use btrs::Cli;

/// Log to stderr so stdout stays machine-readable; `BARRIERS_LOG` sets the filter.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(vars::BARRIERS_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(e) = btrs::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
