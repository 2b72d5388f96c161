//! # Environment-Aware YAML Configuration
//!
//! This module loads deployment configuration from YAML files. A config file
//! may carry a reserved `all` section with defaults plus one section per
//! deployment environment whose keys override those defaults:
//!
//! ```yaml
//! all:
//!   db_host: localhost
//!   workers: 2
//! prod:
//!   db_host: db.internal
//!   workers: 8
//! dev:
//!   debug: true
//! ```
//!
//! ## Loading Rules
//!
//! - A missing file is not an error: it loads as an empty mapping.
//! - A document without an `all` section loads as an empty mapping.
//! - Without an environment, the `all` section is returned as-is.
//! - With an environment that the document does not define, the result is
//!   an empty mapping.
//! - Otherwise the environment section is shallow-merged over a copy of
//!   `all`: top-level keys from the environment replace those from `all`,
//!   nested mappings are replaced wholesale rather than merged.
//!
//! The loaded document is never modified by a merge.
//!
//! ## Example
//!
//! ```
//! use deploykit::config;
//!
//! let yaml = "all: {a: 1, b: 2}\nprod: {b: 3, c: 4}\n";
//! let merged = config::parse_config(yaml, Some("prod")).unwrap();
//!
//! assert_eq!(merged.len(), 3);
//! assert_eq!(merged.get("b").and_then(|v| v.as_i64()), Some(3));
//! ```

use std::io::ErrorKind;
use std::path::Path;

use log::debug;
use serde_yaml::{Mapping, Value};

use crate::defaults::ALL_SECTION;
use crate::error::{Error, Result};

/// Load a YAML file as a top-level mapping.
///
/// Missing files, empty documents, and documents whose top level is not a
/// mapping all load as an empty mapping. Unreadable files and malformed YAML
/// are errors.
pub fn load_yaml<P: AsRef<Path>>(path: P) -> Result<Mapping> {
    match read_optional(path.as_ref())? {
        Some(content) => parse_yaml(&content),
        None => Ok(Mapping::new()),
    }
}

/// Parse a YAML string as a top-level mapping. See [`load_yaml`].
pub fn parse_yaml(content: &str) -> Result<Mapping> {
    let document: Value = serde_yaml::from_str(content)?;
    match document {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        other => {
            debug!(
                "YAML document is a {} rather than a mapping, treating as empty",
                value_kind(&other)
            );
            Ok(Mapping::new())
        }
    }
}

/// Load an environment-aware configuration file.
///
/// `env` of `None` (or an empty string) selects the `all` section alone;
/// any other value selects `all` with that environment's section merged on
/// top. See the module documentation for the full set of rules.
pub fn load_yaml_config<P: AsRef<Path>>(path: P, env: Option<&str>) -> Result<Mapping> {
    let path = path.as_ref();
    match read_optional(path)? {
        Some(content) => parse_config(&content, env),
        None => {
            debug!("Config file {} not found, using empty config", path.display());
            Ok(Mapping::new())
        }
    }
}

/// Resolve an environment-aware configuration from a YAML string.
///
/// See [`load_yaml_config`].
pub fn parse_config(content: &str, env: Option<&str>) -> Result<Mapping> {
    let document = parse_yaml(content)?;
    resolve(&document, env)
}

/// Select and merge sections of an already parsed configuration document.
pub fn resolve(document: &Mapping, env: Option<&str>) -> Result<Mapping> {
    let Some(all) = document.get(ALL_SECTION) else {
        debug!("Config has no '{}' section, using empty config", ALL_SECTION);
        return Ok(Mapping::new());
    };
    let base = section(ALL_SECTION, all)?;

    let env = match env {
        Some(env) if !env.is_empty() => env,
        _ => return Ok(base),
    };

    match document.get(env) {
        Some(overlay) => Ok(merge_sections(&base, &section(env, overlay)?)),
        None => {
            debug!("Config has no '{}' section, using empty config", env);
            Ok(Mapping::new())
        }
    }
}

/// Shallow-merge `overlay` onto a copy of `base`.
///
/// Keys present in both take the overlay's value. Neither input is modified.
pub fn merge_sections(base: &Mapping, overlay: &Mapping) -> Mapping {
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// List the environment sections defined by a configuration file.
///
/// Every string top-level key other than `all` counts as an environment.
/// A missing file defines no environments.
pub fn environments<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let document = load_yaml(path)?;
    Ok(document
        .keys()
        .filter_map(Value::as_str)
        .filter(|key| *key != ALL_SECTION)
        .map(str::to_string)
        .collect())
}

/// Read a file, mapping "not found" to `None`.
fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::Io(e)),
    }
}

/// Interpret a section value as a mapping. `null` is an empty section.
fn section(name: &str, value: &Value) -> Result<Mapping> {
    match value {
        Value::Mapping(map) => Ok(map.clone()),
        Value::Null => Ok(Mapping::new()),
        other => Err(Error::ConfigParse {
            message: format!(
                "section '{}' must be a mapping, found {}",
                name,
                value_kind(other)
            ),
            hint: Some(format!(
                "Write the keys of '{}' as an indented block of 'key: value' lines",
                name
            )),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
