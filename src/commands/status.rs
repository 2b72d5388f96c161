//! # Status Command Implementation
//!
//! Prints the short commit hash of `HEAD` and whether the working copy is
//! dirty (modified tracked files or untracked files).
//!
//! Text output is two lines meant for scripts:
//!
//! ```text
//! commit 1a2b3c4
//! dirty
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use deploykit::git;
use deploykit::suggestions;

use super::Format;

/// Show the short commit hash and whether the working copy is dirty
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Repository to inspect.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub repo: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,
}

/// Execute the `status` command.
pub fn execute(args: StatusArgs) -> Result<ExitCode> {
    let status = git::status(&args.repo).map_err(|e| suggestions::git_failed(&args.repo, &e))?;

    match args.format {
        Format::Text => {
            println!("commit {}", status.commit);
            println!("{}", if status.dirty { "dirty" } else { "clean" });
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&status)?),
    }

    Ok(ExitCode::SUCCESS)
}
