//! Line-oriented `key=value` settings files
//!
//! Settings files are the simplest configuration format the deploy scripts
//! read:
//!
//! ```text
//! # deploy settings
//! user = deploy
//! hosts=web1,web2
//! maintenance
//! ```
//!
//! Parsing rules:
//!
//! - Blank lines and lines whose first non-whitespace character is `#` are
//!   skipped. There is no inline comment syntax; `a = b # c` has the value
//!   `b # c`.
//! - Every other line is split on its first `=`. Key and value are trimmed.
//! - A line without `=` is a key with an empty value.
//! - When a key repeats, the last occurrence wins.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Load a settings file. A missing file yields an empty map.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, String>> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(parse_settings(&content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Settings file {} not found", path.display());
            Ok(BTreeMap::new())
        }
        Err(e) => Err(Error::Io(e)),
    }
}

/// Parse settings from a string. See the module documentation for the rules.
pub fn parse_settings(content: &str) -> BTreeMap<String, String> {
    let mut settings = BTreeMap::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (key, value) = match trimmed.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (trimmed, ""),
        };
        settings.insert(key.to_string(), value.to_string());
    }

    settings
}
