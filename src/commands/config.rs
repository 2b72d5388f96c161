//! # Config Command Implementation
//!
//! This module implements the `config` subcommand, which loads an
//! environment-aware YAML configuration and prints the resolved mapping.
//!
//! By default the command is as forgiving as the library: a missing file,
//! a missing `all` section, or an unknown environment all print an empty
//! mapping. `--strict` turns a missing file or an unknown environment into
//! an error with suggestions.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use deploykit::config;
use deploykit::defaults::{ALL_SECTION, ENV_VAR_ENVIRONMENT};
use deploykit::suggestions;

use super::Format;

/// Print an environment-aware YAML configuration
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Path to the YAML configuration file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Environment section to merge over the `all` defaults.
    #[arg(short, long, value_name = "ENV", env = ENV_VAR_ENVIRONMENT)]
    pub env: Option<String>,

    /// Print the whole document instead of resolving `all` and the environment.
    ///
    /// Any environment given with --env or DEPLOYKIT_ENV is ignored.
    #[arg(long)]
    pub raw: bool,

    /// Fail when the file is missing or the environment is not defined.
    #[arg(long)]
    pub strict: bool,

    /// Output format (text prints YAML).
    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,
}

/// Execute the `config` command.
pub fn execute(args: ConfigArgs) -> Result<ExitCode> {
    let path = &args.file;

    if args.strict {
        if !path.exists() {
            return Err(suggestions::config_not_found(path));
        }
        if let Some(env) = args.env.as_deref().filter(|e| !e.is_empty() && !args.raw) {
            let available = config::environments(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            if env != ALL_SECTION && !available.iter().any(|defined| defined == env) {
                return Err(suggestions::unknown_environment(env, path, &available));
            }
        }
    }

    let loaded = if args.raw {
        config::load_yaml(path)
    } else {
        config::load_yaml_config(path, args.env.as_deref())
    };
    let mapping =
        loaded.with_context(|| format!("Failed to load config from {}", path.display()))?;

    match args.format {
        Format::Text => print!("{}", serde_yaml::to_string(&mapping)?),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&mapping)
                .context("Configuration cannot be represented as JSON")?
        ),
    }

    Ok(ExitCode::SUCCESS)
}
