//! # Error Handling
//!
//! This module defines the centralized error type for `deploykit`. It uses
//! the `thiserror` library to build an `Error` enum covering every failure
//! the helpers can report.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failures. Each variant carries enough
//!   context (paths, commands, stderr) to act on the message directly.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Expected absence is *not* an error in this crate: a missing config file
//! yields an empty mapping, an unknown program yields `None`, and a missing
//! package manager yields `false`. Errors are reserved for failures the
//! caller cannot reasonably continue from:
//!
//! - Malformed YAML or structurally invalid config sections.
//! - A required tool (such as `git`) that is not installed.
//! - A git or package-manager invocation that exits unsuccessfully.
//! - I/O failures while reading inputs or writing an archive.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for deploykit operations
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration file parsed as YAML but a section has the wrong shape.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A tool that the operation cannot run without is not on the search path.
    #[error("Required tool not found: {tool}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ToolNotFound {
        tool: String,
        /// Optional hint for how to make the tool available
        hint: Option<String>,
    },

    /// A git invocation failed to start or exited unsuccessfully.
    #[error("Git command failed in {}: git {command} - {stderr}", dir.display())]
    GitCommand {
        command: String,
        dir: PathBuf,
        stderr: String,
    },

    /// Any other external command failed to start or exited unsuccessfully.
    #[error("Command failed: {command} - {message}")]
    Command { command: String, message: String },

    /// Writing the archive failed.
    #[error("Archive error for {}: {message}", path.display())]
    Archive { path: PathBuf, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
