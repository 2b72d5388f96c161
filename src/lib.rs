//! # deploykit
//!
//! Small, independent helpers for deployment scripts. Each module covers one
//! job and can be used on its own; none of them keep state between calls.
//!
//! ## Quick Example
//!
//! ```
//! use deploykit::{config, settings};
//!
//! // Environment-aware YAML: `prod` overrides keys from `all`
//! let yaml = "all:\n  workers: 2\n  host: localhost\nprod:\n  workers: 8\n";
//! let prod = config::parse_config(yaml, Some("prod")).unwrap();
//! assert_eq!(prod.get("workers").and_then(|v| v.as_i64()), Some(8));
//! assert_eq!(prod.get("host").and_then(|v| v.as_str()), Some("localhost"));
//!
//! // key=value settings with comments
//! let values = settings::parse_settings("# deploy\nuser = deploy\n");
//! assert_eq!(values.get("user").map(String::as_str), Some("deploy"));
//! ```
//!
//! ## Modules
//!
//! - **`config`**: YAML files with an `all` section of defaults and
//!   per-environment overrides.
//! - **`settings`**: line-oriented `key=value` files.
//! - **`locate`**: find executables on the search path, and fail fast when a
//!   required tool is missing.
//! - **`package`**: ask a package manager whether a package is installed.
//! - **`git`**: run git, check for a dirty working copy, read the short
//!   commit hash.
//! - **`archive`**: tar up a repository together with all its submodules.
//!
//! ## Errors
//!
//! Expected absence is reported through ordinary values: a missing file loads
//! as an empty mapping, an unknown program is `None`, a missing package
//! manager means "not installed". Failures of external commands and I/O are
//! returned as [`error::Error`].

pub mod archive;
pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod locate;
pub mod output;
pub mod package;
pub mod settings;
pub mod suggestions;

#[cfg(test)]
mod settings_proptest;
#[cfg(test)]
mod test_support;
