//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_file("deploy.yaml", configs::ENVIRONMENTS);
//!     fixture.command().args(["config", "deploy.yaml"]).assert().success();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use assert_fs::prelude::*;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    #[allow(unused_imports)]
    pub use super::git;
    pub use super::TestFixture;
}

/// Common configuration snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Environment-aware config with defaults and two environments.
    pub const ENVIRONMENTS: &str = r#"
all:
  app: shop
  workers: 2
  db_host: localhost
prod:
  workers: 8
  db_host: db.internal
dev:
  debug: true
"#;

    /// Config without the reserved `all` section.
    pub const NO_ALL: &str = r#"
prod:
  workers: 8
"#;

    /// Settings file with comments, blank lines and a bare key.
    pub const SETTINGS: &str = "# deploy settings\n\nuser = deploy\nhosts=web1,web2\n  # indented comment\nmaintenance\n";

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "all: [unclosed";
}

/// Run git in `dir`, panicking with its output on failure.
#[allow(dead_code)]
pub fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    assert!(
        output.status.success(),
        "git {} failed\nstdout:\n{}\nstderr:\n{}",
        args.join(" "),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// A test fixture that provides a temporary directory with optional files.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_file("fabricrc", "user = deploy\n");
///
/// fixture.command().args(["settings", "fabricrc"]).assert().success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Turn the fixture directory into a git repository with one commit
    /// holding `README.md` plus any files already written.
    pub fn with_git_repo(self) -> Self {
        let fixture = self.with_file("README.md", "# Fixture\n");
        init_repo(fixture.path());
        fixture.commit_all("Initial commit");
        fixture
    }

    /// Stage everything and commit.
    pub fn commit_all(&self, message: &str) {
        git(self.path(), &["add", "."]);
        git(self.path(), &["commit", "-m", message]);
    }

    /// Add `source` as a submodule at `rel_path` and commit it.
    pub fn add_submodule(&self, source: &Path, rel_path: &str) {
        let url = source.to_string_lossy().to_string();
        git(
            self.path(),
            &[
                "-c",
                "protocol.file.allow=always",
                "submodule",
                "add",
                &url,
                rel_path,
            ],
        );
        git(
            self.path(),
            &["commit", "-m", &format!("Add submodule {}", rel_path)],
        );
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of a file inside the fixture.
    pub fn file_path(&self, path: &str) -> PathBuf {
        self.temp_dir.path().join(path)
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("deploykit");
        cmd.current_dir(self.path())
            .env_remove("DEPLOYKIT_ENV")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize a repository with a deterministic branch and identity.
#[allow(dead_code)]
pub fn init_repo(path: &Path) {
    git(path, &["init"]);
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);
}
