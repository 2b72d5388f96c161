//! End-to-end tests for the `deploykit status` command.

#[allow(dead_code)]
mod common;
#[allow(unused_imports)]
use common::prelude::*;

/// The short hash git itself reports for HEAD.
fn short_head(fixture: &TestFixture) -> String {
    let output = std::process::Command::new("git")
        .current_dir(fixture.path())
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .unwrap();
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn test_status_clean_repo() {
    let fixture = TestFixture::new().with_git_repo();
    let expected = format!("commit {}\nclean\n", short_head(&fixture));

    fixture
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn test_status_fresh_clone_is_clean() {
    let origin = TestFixture::new().with_git_repo();
    let clone = TestFixture::new();
    git(clone.path(), &["clone", &origin.path().to_string_lossy(), "."]);

    fixture_status_is_clean(&clone, &short_head(&origin));
}

#[test]
fn test_status_clone_with_uninitialized_submodule_is_clean() {
    let library = TestFixture::new().with_git_repo();
    let origin = TestFixture::new().with_git_repo();
    origin.add_submodule(library.path(), "vendor/lib");
    let clone = TestFixture::new();
    git(clone.path(), &["clone", &origin.path().to_string_lossy(), "."]);

    fixture_status_is_clean(&clone, &short_head(&origin));
}

fn fixture_status_is_clean(fixture: &TestFixture, commit: &str) {
    fixture
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("commit {}\nclean\n", commit)));
}

#[test]
fn test_status_modified_file_is_dirty() {
    let fixture = TestFixture::new().with_git_repo();
    fixture.child("README.md").write_str("# Changed\n").unwrap();

    fixture
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("dirty\n"));
}

#[test]
fn test_status_untracked_file_is_dirty() {
    let fixture = TestFixture::new().with_git_repo();
    fixture.child("notes.txt").write_str("todo\n").unwrap();

    fixture
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("dirty\n"));
}

#[test]
fn test_status_repo_flag() {
    let fixture = TestFixture::new().with_git_repo();
    let elsewhere = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("deploykit");
    cmd.current_dir(elsewhere.path())
        .args(["status", "--repo"])
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(short_head(&fixture)));
}

#[test]
fn test_status_json() {
    let fixture = TestFixture::new().with_git_repo();

    let output = fixture
        .command()
        .args(["status", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["commit"], short_head(&fixture).as_str());
    assert_eq!(value["dirty"], false);
}

#[test]
fn test_status_outside_repository_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Git command failed"))
        .stderr(predicate::str::contains("hint:"));
}
