//! # Which Command Implementation
//!
//! Resolves a program against `PATH` and prints the path it resolves to.
//! Exits with status 1 when the program cannot be found.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use deploykit::locate::Locator;
use deploykit::suggestions;

/// Locate an executable on PATH
#[derive(Args, Debug)]
pub struct WhichArgs {
    /// Program name, or a path to check directly.
    #[arg(value_name = "PROGRAM")]
    pub program: String,
}

/// Execute the `which` command.
pub fn execute(args: WhichArgs) -> Result<ExitCode> {
    match Locator::from_env().locate(&args.program) {
        Some(path) => {
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        None => Err(suggestions::program_not_found(&args.program)),
    }
}
