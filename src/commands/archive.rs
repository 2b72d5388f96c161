//! # Archive Command Implementation
//!
//! Writes a `.tar.gz` of a git repository that, unlike `git archive`,
//! includes the contents of every submodule. A relative output path is
//! placed inside the repository directory.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use deploykit::archive;
use deploykit::error::Error;
use deploykit::output::{success, OutputConfig};
use deploykit::suggestions;

/// Create a .tar.gz of a git repository including its submodules
#[derive(Args, Debug)]
pub struct ArchiveArgs {
    /// Archive file to write (relative paths are placed inside the repository).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Repository to archive.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub repo: PathBuf,
}

/// Execute the `archive` command.
pub fn execute(args: ArchiveArgs, output: &OutputConfig) -> Result<ExitCode> {
    let summary = archive::create_archive(&args.repo, &args.output).map_err(|e| match e {
        Error::GitCommand { .. } => suggestions::git_failed(&args.repo, &e),
        other => other.into(),
    })?;

    println!(
        "{}",
        success(
            output,
            &format!(
                "Archive created at {} ({} files)",
                summary.path.display(),
                summary.entries
            )
        )
    );
    Ok(ExitCode::SUCCESS)
}
