//! Executable lookup over the search path
//!
//! A [`Locator`] holds an explicit search path and the working directory used
//! to resolve relative program paths, so lookups never depend on hidden
//! process state once the locator is built. [`Locator::from_env`] captures
//! `PATH` and the current directory; [`which`] is shorthand for a one-off
//! lookup with that locator.
//!
//! Resolution rules:
//!
//! - A program containing a path separator (`./bin/deploy`, `/usr/bin/git`)
//!   is checked directly and returned unchanged if it is an executable file.
//! - A bare name is joined with each search path directory in order; the
//!   first executable match wins.
//! - No match is `None`, not an error. Use [`Locator::require`] when the tool
//!   is a hard precondition.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use log::debug;

use crate::error::{Error, Result};

/// Resolves program names against an explicit search path.
#[derive(Debug, Clone)]
pub struct Locator {
    search_path: Option<OsString>,
    cwd: PathBuf,
}

impl Locator {
    /// Create a locator with the given search path (in `PATH` syntax) and
    /// working directory.
    pub fn new<S: Into<OsString>, P: Into<PathBuf>>(search_path: S, cwd: P) -> Self {
        Self {
            search_path: Some(search_path.into()),
            cwd: cwd.into(),
        }
    }

    /// Create a locator from the process `PATH` and current directory.
    pub fn from_env() -> Self {
        Self {
            search_path: std::env::var_os("PATH"),
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Resolve `program` to an executable path.
    pub fn locate(&self, program: &str) -> Option<PathBuf> {
        if program.is_empty() {
            return None;
        }

        if has_separator(program) {
            return which::which_in(program, None::<&OsStr>, &self.cwd)
                .ok()
                .map(|_| PathBuf::from(program));
        }

        let search_path = self.search_path.as_deref().filter(|p| !p.is_empty())?;
        match which::which_in(program, Some(search_path), &self.cwd) {
            Ok(path) => {
                debug!("Resolved {} to {}", program, path.display());
                Some(path)
            }
            Err(_) => {
                debug!("{} not found on search path", program);
                None
            }
        }
    }

    /// Resolve `program`, failing with [`Error::ToolNotFound`] when absent.
    pub fn require(&self, program: &str) -> Result<PathBuf> {
        self.locate(program).ok_or_else(|| Error::ToolNotFound {
            tool: program.to_string(),
            hint: Some(format!(
                "Install {} and make sure its directory is listed in PATH",
                program
            )),
        })
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Resolve `program` against the process `PATH`.
pub fn which(program: &str) -> Option<PathBuf> {
    Locator::from_env().locate(program)
}

fn has_separator(program: &str) -> bool {
    program.contains(std::path::MAIN_SEPARATOR) || program.contains('/')
}
