//! # deploykit CLI
//!
//! This is the binary entry point for the `deploykit` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Initializing logging and output styling from the global flags.
//! - Executing the appropriate command and translating its outcome into an
//!   exit code.
//!
//! The helpers themselves live in the `deploykit` library crate; every
//! command here is a thin wrapper around one of them.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli.execute()
}
