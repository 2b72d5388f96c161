//! # Package Command Implementation
//!
//! Asks a package manager whether a package is installed. The default
//! manager is PEAR (`pear list -a`); `--manager` and `--list-arg` describe
//! any other manager whose list output names installed packages.
//!
//! The exit status carries the answer: 0 when installed, 1 when not
//! installed or when the manager itself is missing.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use deploykit::defaults::{DEFAULT_LIST_ARGS, DEFAULT_PACKAGE_MANAGER};
use deploykit::locate::Locator;
use deploykit::output::{success, warning, OutputConfig};
use deploykit::package::PackageManager;

/// Check whether a package manager reports a package as installed
#[derive(Args, Debug)]
pub struct PackageArgs {
    /// Package name, matched as a substring of the manager's list output.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Package manager program.
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_PACKAGE_MANAGER)]
    pub manager: String,

    /// Argument of the manager's list command (repeatable).
    ///
    /// Defaults to `list -a` for pear and to no arguments for other managers.
    #[arg(long = "list-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub list_args: Vec<String>,
}

impl PackageArgs {
    fn manager(&self) -> PackageManager {
        if !self.list_args.is_empty() {
            PackageManager::new(self.manager.as_str(), self.list_args.iter().cloned())
        } else if self.manager == DEFAULT_PACKAGE_MANAGER {
            PackageManager::new(self.manager.as_str(), DEFAULT_LIST_ARGS.iter().copied())
        } else {
            PackageManager::new(self.manager.as_str(), Vec::<String>::new())
        }
    }
}

/// Execute the `package` command.
pub fn execute(args: PackageArgs, output: &OutputConfig) -> Result<ExitCode> {
    let manager = args.manager();
    let installed = manager
        .is_installed(&Locator::from_env(), &args.name)
        .with_context(|| format!("Failed to list packages with {}", manager.command_line()))?;

    if installed {
        println!("{}", success(output, &format!("{} is installed", args.name)));
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{}", warning(output, &format!("{} is not installed", args.name)));
        Ok(ExitCode::FAILURE)
    }
}
