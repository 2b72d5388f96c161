//! Installed-package detection through a package manager's list command
//!
//! A [`PackageManager`] names a program and the arguments that make it print
//! every installed package. [`PackageManager::is_installed`] runs that
//! command once and reports whether the package name occurs anywhere in its
//! output.
//!
//! The match is a plain substring search, so probing for `Mail` also matches
//! `Mail_Mime`. Callers rely on this loose match; it is kept as is.
//!
//! A manager that is not installed is not an error: the probe logs a warning
//! and reports the package as absent.

use std::process::Command;

use log::{debug, warn};

use crate::defaults::{DEFAULT_LIST_ARGS, DEFAULT_PACKAGE_MANAGER};
use crate::error::{Error, Result};
use crate::locate::Locator;

/// A package manager and the arguments of its "list everything" command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    program: String,
    list_args: Vec<String>,
}

impl PackageManager {
    /// Describe a package manager by program name and list arguments.
    pub fn new<S, I, A>(program: S, list_args: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.into(),
            list_args: list_args.into_iter().map(Into::into).collect(),
        }
    }

    /// PHP's PEAR installer, listed with `pear list -a`.
    pub fn pear() -> Self {
        Self::new(DEFAULT_PACKAGE_MANAGER, DEFAULT_LIST_ARGS.iter().copied())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn list_args(&self) -> &[String] {
        &self.list_args
    }

    /// The list command as a single display string.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.list_args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the list command and return its stdout.
    ///
    /// `None` when the manager itself cannot be found.
    pub fn list_installed(&self, locator: &Locator) -> Result<Option<String>> {
        let Some(executable) = locator.locate(&self.program) else {
            return Ok(None);
        };

        debug!("Running {} ({})", self.command_line(), executable.display());
        let output = Command::new(&executable)
            .args(&self.list_args)
            .output()
            .map_err(|e| Error::Command {
                command: self.command_line(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(Error::Command {
                command: self.command_line(),
                message: if stderr.is_empty() {
                    output.status.to_string()
                } else {
                    stderr
                },
            });
        }

        Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned()))
    }

    /// Whether `package` appears in the manager's list output.
    ///
    /// Returns `Ok(false)` with a logged warning when the manager is not
    /// installed. A list command that fails to run is an error.
    pub fn is_installed(&self, locator: &Locator, package: &str) -> Result<bool> {
        match self.list_installed(locator)? {
            Some(listing) => Ok(listing.contains(package)),
            None => {
                warn!("{} is not installed", self.program);
                Ok(false)
            }
        }
    }
}

impl Default for PackageManager {
    fn default() -> Self {
        Self::pear()
    }
}

/// Whether `package` is installed according to PEAR, using the process `PATH`.
pub fn pear_detect(package: &str) -> Result<bool> {
    PackageManager::pear().is_installed(&Locator::from_env(), package)
}
