//! CLI argument parsing and command dispatch

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use deploykit::output::OutputConfig;

use crate::commands;

/// deploykit - Helpers for deployment scripts
#[derive(Parser, Debug)]
#[command(name = "deploykit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print an environment-aware YAML configuration
    Config(commands::config::ConfigArgs),

    /// Print the key=value pairs of a settings file
    Settings(commands::settings::SettingsArgs),

    /// Locate an executable on PATH
    Which(commands::which::WhichArgs),

    /// Check whether a package manager reports a package as installed
    Package(commands::package::PackageArgs),

    /// Create a .tar.gz of a git repository including its submodules
    Archive(commands::archive::ArchiveArgs),

    /// Show the short commit hash and whether the working copy is dirty
    Status(commands::status::StatusArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<ExitCode> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Config(args) => commands::config::execute(args),
            Commands::Settings(args) => commands::settings::execute(args),
            Commands::Which(args) => commands::which::execute(args),
            Commands::Package(args) => commands::package::execute(args, &output),
            Commands::Archive(args) => commands::archive::execute(args, &output),
            Commands::Status(args) => commands::status::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Route `log` records to stderr, filtered by `RUST_LOG` or `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}
