//! Real git repositories for unit tests.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// A repository with one commit containing `README.md`.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());
    std::fs::write(temp_dir.path().join("README.md"), "# Test\n").unwrap();
    commit_all(temp_dir.path(), "Initial commit");
    temp_dir
}

/// Initialize an empty repository with a deterministic branch and identity.
pub(crate) fn init_repo(path: &Path) {
    git(path, &["init"]);
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);
}

pub(crate) fn commit_all(path: &Path, message: &str) {
    git(path, &["add", "."]);
    git(path, &["commit", "-m", message]);
}

/// Add `source` as a submodule of `parent` at `rel_path` and commit it.
pub(crate) fn add_submodule(parent: &Path, source: &Path, rel_path: &str) {
    let url = source.to_string_lossy().to_string();
    git(
        parent,
        &[
            "-c",
            "protocol.file.allow=always",
            "submodule",
            "add",
            &url,
            rel_path,
        ],
    );
    git(parent, &["commit", "-m", &format!("Add submodule {}", rel_path)]);
}

/// Clone `source` into a fresh directory, optionally checking out submodules.
pub(crate) fn clone_repo(source: &Path, recurse_submodules: bool) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let url = source.to_string_lossy().to_string();
    let mut args = vec!["-c", "protocol.file.allow=always", "clone"];
    if recurse_submodules {
        args.push("--recurse-submodules");
    }
    args.extend([url.as_str(), "."]);
    git(temp_dir.path(), &args);
    temp_dir
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
