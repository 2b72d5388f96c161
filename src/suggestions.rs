//! # Error Suggestions
//!
//! This module provides helper functions for generating helpful error
//! messages with hints and suggestions. Errors should tell users what went
//! wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use deploykit::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("Program not found: {}", program);
//!
//! // Use:
//! return Err(suggestions::program_not_found(program));
//! ```

use std::path::Path;

/// Generate an error for a configuration file that does not exist.
///
/// Only raised in strict mode; by default a missing file is an empty config.
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Configuration file not found: {path}\n\n\
         hint: Check the path passed to 'deploykit config'\n\
         hint: Drop --strict to treat a missing file as an empty configuration",
        path = path.display()
    )
}

/// Generate an error for an environment the config file does not define.
///
/// Suggests the closest defined environment when one is a likely typo.
pub fn unknown_environment(env: &str, path: &Path, available: &[String]) -> anyhow::Error {
    let suggestion = closest_environment(env, available)
        .map(|s| format!("\n\nDid you mean '{}'?", s))
        .unwrap_or_default();
    let listed = if available.is_empty() {
        "hint: The file defines no environment sections".to_string()
    } else {
        format!("hint: Defined environments are: {}", available.join(", "))
    };

    anyhow::anyhow!(
        "Unknown environment '{env}' in {path}{suggestion}\n\n\
         {listed}\n\
         hint: Drop --strict to fall back to an empty configuration",
        path = path.display()
    )
}

/// Generate an error for a program that is not on the search path.
pub fn program_not_found(program: &str) -> anyhow::Error {
    let hint = if program.contains('/') {
        "hint: Check that the file exists and has execute permission"
    } else {
        "hint: Check that the program is installed and its directory is in PATH"
    };
    anyhow::anyhow!("Program not found: {program}\n\n{hint}")
}

/// Generate an error for a git failure while inspecting `dir`.
///
/// Includes hints about the usual causes: not a repository, or no commits.
pub fn git_failed(dir: &Path, error: &crate::error::Error) -> anyhow::Error {
    anyhow::anyhow!(
        "{error}\n\n\
         hint: Make sure {dir} is inside a git working copy with at least one commit\n\
         hint: Use --repo to point at a different repository",
        dir = dir.display()
    )
}

/// The defined environment closest to `env`, when it looks like a typo.
///
/// Allows one edit per three characters of `env`, and at least one.
fn closest_environment<'a>(env: &str, available: &'a [String]) -> Option<&'a str> {
    let limit = (env.chars().count() / 3).max(1);
    available
        .iter()
        .map(|name| (name.as_str(), levenshtein(env, name)))
        .filter(|(_, distance)| *distance <= limit)
        .min_by_key(|(_, distance)| *distance)
        .map(|(name, _)| name)
}

/// Levenshtein distance, keeping a single row of the edit matrix.
fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}
