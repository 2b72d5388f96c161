//! # Git Archives With Submodules
//!
//! `git archive` leaves submodules out of the tarball. This module builds the
//! same kind of `.tar.gz` but descends into every submodule checkout, so the
//! archive contains the complete tree a deployment needs.
//!
//! ## File Discovery
//!
//! [`collect_files`] runs `git ls-files` in the repository. An entry naming a
//! directory that holds a `.git` marker is a submodule checkout: discovery
//! recurses into it and prefixes everything it finds with the submodule's
//! path. Any other entry is a file. The result is one flat list in
//! `ls-files` order with submodule contents spliced in where the submodule
//! entry appeared.
//!
//! Ignored and untracked files never appear because only tracked files are
//! listed. Each recursion level runs git with the submodule as its working
//! directory; the process working directory is never changed.
//!
//! ## Failure Policy
//!
//! Archiving is all-or-nothing from the caller's point of view: the first git
//! or filesystem failure aborts the operation and is returned. A partially
//! written archive may be left at the destination.

use std::fs::File;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use log::{debug, info};

use crate::defaults::GIT_MARKER;
use crate::error::{Error, Result};
use crate::git;
use crate::locate::Locator;

/// Result of a successful [`create_archive`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// Where the archive was written.
    pub path: PathBuf,
    /// Number of entries appended.
    pub entries: usize,
}

/// List every file tracked by the repository at `root` and its submodules.
///
/// Paths are relative to the top directory of the repository containing
/// `root`. When `root` is a subdirectory, only files below it are listed.
pub fn collect_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let (_, files) = discover(root.as_ref())?;
    Ok(files)
}

/// Write a gzip-compressed tarball of `root` and all its submodules.
///
/// A relative `archive_name` is placed inside `root`; an absolute one is
/// used as is. Uses the process `PATH` to find git.
pub fn create_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    root: P,
    archive_name: Q,
) -> Result<ArchiveSummary> {
    create_archive_with(&Locator::from_env(), root, archive_name)
}

/// [`create_archive`] with an explicit locator for the git precondition.
pub fn create_archive_with<P: AsRef<Path>, Q: AsRef<Path>>(
    locator: &Locator,
    root: P,
    archive_name: Q,
) -> Result<ArchiveSummary> {
    locator.require("git")?;

    let root = root.as_ref();
    let destination = root.join(archive_name.as_ref());
    let (top, files) = discover(root)?;

    write_tarball(&top, &files, &destination)?;
    info!(
        "Archive created at {} ({} entries)",
        destination.display(),
        files.len()
    );

    Ok(ArchiveSummary {
        path: destination,
        entries: files.len(),
    })
}

/// Resolve the repository top directory and collect files below `root`.
fn discover(root: &Path) -> Result<(PathBuf, Vec<PathBuf>)> {
    let top = git::toplevel(root)?;
    let mut files = Vec::new();
    collect_into(root, &top, Path::new(""), &mut files)?;
    Ok((top, files))
}

/// Append the files git tracks in `list_dir` to `files`.
///
/// Entries are relative to `base` (the top of the repository `list_dir`
/// belongs to) and are recorded under `prefix`.
fn collect_into(
    list_dir: &Path,
    base: &Path,
    prefix: &Path,
    files: &mut Vec<PathBuf>,
) -> Result<()> {
    for entry in git::ls_files(list_dir)? {
        let on_disk = base.join(&entry);
        let archived = prefix.join(&entry);

        if is_nested_repository(&on_disk) {
            debug!("Descending into submodule {}", archived.display());
            collect_into(&on_disk, &on_disk, &archived, files)?;
        } else {
            files.push(archived);
        }
    }
    Ok(())
}

/// A real directory (not a symlink to one) holding a `.git` file or directory.
fn is_nested_repository(path: &Path) -> bool {
    let is_dir = std::fs::symlink_metadata(path)
        .map(|meta| meta.is_dir())
        .unwrap_or(false);
    is_dir && path.join(GIT_MARKER).exists()
}

fn write_tarball(top: &Path, files: &[PathBuf], destination: &Path) -> Result<()> {
    let archive_error = |e: std::io::Error| Error::Archive {
        path: destination.to_path_buf(),
        message: e.to_string(),
    };

    let file = File::create(destination).map_err(archive_error)?;
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
    builder.follow_symlinks(false);

    for name in files {
        builder
            .append_path_with_name(top.join(name), name)
            .map_err(|e| Error::Archive {
                path: destination.to_path_buf(),
                message: format!("failed to add {}: {}", name.display(), e),
            })?;
    }

    let encoder = builder.into_inner().map_err(archive_error)?;
    encoder.finish().map_err(archive_error)?;
    Ok(())
}
