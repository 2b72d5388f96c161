//! Git command runner and working-copy status helpers.
//!
//! Every function takes the repository directory explicitly and runs the
//! system `git` binary there; nothing here changes the process working
//! directory. Output is parsed from git's plumbing-friendly text formats.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};

/// Snapshot of a working copy as reported by [`status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkingCopyStatus {
    /// Abbreviated SHA of `HEAD`.
    pub commit: String,
    /// Whether tracked files differ from the index or untracked files exist.
    pub dirty: bool,
}

/// Spawn git in `dir` and collect its output without checking the exit code.
fn git_output(dir: &Path, args: &[&str]) -> Result<Output> {
    debug!("Running git {} in {}", args.join(" "), dir.display());
    Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .map_err(|e| Error::GitCommand {
            command: args.join(" "),
            dir: dir.to_path_buf(),
            stderr: format!("failed to execute git: {}", e),
        })
}

fn command_error(dir: &Path, args: &[&str], output: &Output) -> Error {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let stderr = if stderr.is_empty() {
        format!("exit code {}", output.status.code().unwrap_or(-1))
    } else {
        stderr
    };
    Error::GitCommand {
        command: args.join(" "),
        dir: dir.to_path_buf(),
        stderr,
    }
}

/// Run a git command in `dir` and return its stdout.
///
/// A non-zero exit is an [`Error::GitCommand`] carrying git's stderr.
/// Stdout is returned untrimmed; callers decide how to split it.
pub fn run_git<P: AsRef<Path>>(dir: P, args: &[&str]) -> Result<String> {
    let stdout = run_git_raw(dir.as_ref(), args)?;
    Ok(String::from_utf8_lossy(&stdout).into_owned())
}

/// [`run_git`] returning stdout as raw bytes.
fn run_git_raw(dir: &Path, args: &[&str]) -> Result<Vec<u8>> {
    let output = git_output(dir, args)?;
    if output.status.success() {
        Ok(output.stdout)
    } else {
        Err(command_error(dir, args, &output))
    }
}

/// Top-level directory of the repository containing `dir`.
pub fn toplevel<P: AsRef<Path>>(dir: P) -> Result<PathBuf> {
    let stdout = run_git(dir, &["rev-parse", "--show-toplevel"])?;
    let line = stdout.strip_suffix('\n').unwrap_or(&stdout);
    Ok(PathBuf::from(line))
}

/// List the files tracked by the repository at `dir`.
///
/// Paths are relative to the repository's top directory and are read
/// NUL-separated and kept as bytes, so names with spaces or bytes that are
/// not UTF-8 come back verbatim. Submodules appear as a single entry naming
/// their directory.
pub fn ls_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let stdout = run_git_raw(
        dir.as_ref(),
        &["ls-files", "--full-name", "--exclude-standard", "-z"],
    )?;
    Ok(stdout
        .split(|byte| *byte == 0)
        .filter(|entry| !entry.is_empty())
        .map(path_from_bytes)
        .collect())
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(bytes))
}

// Git emits UTF-8 paths on platforms without byte-string file names.
#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

/// Whether tracked files in the working tree differ from the index.
pub fn has_worktree_changes<P: AsRef<Path>>(dir: P) -> Result<bool> {
    let dir = dir.as_ref();
    let args = ["diff", "--quiet"];
    let output = git_output(dir, &args)?;
    match output.status.code() {
        Some(0) => Ok(false),
        Some(1) => Ok(true),
        _ => Err(command_error(dir, &args, &output)),
    }
}

/// Count the untracked entries `git status` reports.
pub fn untracked_count<P: AsRef<Path>>(dir: P) -> Result<usize> {
    let stdout = run_git(dir, &["status", "--porcelain", "--untracked-files=normal"])?;
    Ok(stdout.lines().filter(|line| line.starts_with("??")).count())
}

/// Whether the working copy has modified tracked files or untracked files.
pub fn is_dirty<P: AsRef<Path>>(dir: P) -> Result<bool> {
    let dir = dir.as_ref();
    if has_worktree_changes(dir)? {
        return Ok(true);
    }
    Ok(untracked_count(dir)? > 0)
}

/// Abbreviated SHA of `HEAD`.
pub fn commit_hash<P: AsRef<Path>>(dir: P) -> Result<String> {
    let stdout = run_git(dir, &["rev-parse", "--short", "HEAD"])?;
    Ok(stdout.trim().to_string())
}

/// Commit hash and dirtiness in one call.
pub fn status<P: AsRef<Path>>(dir: P) -> Result<WorkingCopyStatus> {
    let dir = dir.as_ref();
    Ok(WorkingCopyStatus {
        commit: commit_hash(dir)?,
        dirty: is_dirty(dir)?,
    })
}
