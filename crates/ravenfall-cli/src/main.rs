// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ravenfall CLI entrypoint.
//!
//! Replays recorded frame snapshots through the collision core and prints the
//! resulting pairs or gameplay outcomes.
//!
//! # Usage
//! ```text
//! ravenfall <pairs|resolve|config> [options]
//! ```
//!
//! Exits with code `0` on success and non-zero on any error, including a
//! snapshot that violates the collision core's input contract.

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    match &cli.cmd {
        Command::Pairs(args) => commands::pairs(&cli, args, &mut stdout),
        Command::Resolve(args) => commands::resolve(&cli, args, &mut stdout),
        Command::Config { action } => commands::config(&cli, action, &mut stdout),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
