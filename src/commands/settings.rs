//! # Settings Command Implementation
//!
//! Prints the pairs of a `key=value` settings file, one per line and sorted
//! by key, or as a JSON object. A missing file prints nothing.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use deploykit::settings;

use super::Format;

/// Print the key=value pairs of a settings file
#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// Path to the settings file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,
}

/// Execute the `settings` command.
pub fn execute(args: SettingsArgs) -> Result<ExitCode> {
    let values = settings::load_settings(&args.file)
        .with_context(|| format!("Failed to load settings from {}", args.file.display()))?;

    match args.format {
        Format::Text => {
            for (key, value) in &values {
                println!("{}={}", key, value);
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&values)?),
    }

    Ok(ExitCode::SUCCESS)
}
