//! Default values shared by the library and the CLI.
//!
//! Centralizing these keeps the reserved names used by the loaders and the
//! environment variables read by the CLI in one place.

/// Reserved top-level key holding the defaults of an environment-aware config.
pub const ALL_SECTION: &str = "all";

/// Package manager probed when none is given.
pub const DEFAULT_PACKAGE_MANAGER: &str = "pear";

/// Arguments that make the default package manager list everything installed.
pub const DEFAULT_LIST_ARGS: &[&str] = &["list", "-a"];

/// Entry whose presence marks a directory as the root of a nested repository.
///
/// Submodule checkouts carry a `.git` file, standalone clones a `.git`
/// directory; both count.
pub const GIT_MARKER: &str = ".git";

/// Environment variable supplying the default `--env` for `deploykit config`.
pub const ENV_VAR_ENVIRONMENT: &str = "DEPLOYKIT_ENV";
