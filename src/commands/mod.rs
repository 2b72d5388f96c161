//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `deploykit` command-line tool. Each subcommand is defined in its own file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args`, calls into the
//!   `deploykit` library, prints the result, and returns the exit code.

use clap::ValueEnum;

pub mod archive;
pub mod completions;
pub mod config;
pub mod package;
pub mod settings;
pub mod status;
pub mod which;

/// Output format for commands that print structured data
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Human-readable text (YAML for configuration)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}
