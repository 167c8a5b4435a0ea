//! External override file discovery and parsing.
//!
//! The override file is a JSON object mapping logical font names to path
//! specifiers, typically emitted by a bootstrap script from the system font
//! catalog. A missing or malformed file never fails construction; it only
//! produces a diagnostic and contributes nothing to the merge.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::FontError;

/// Filename searched for next to the executable and in the working directory.
pub const OVERRIDE_FILE_NAME: &str = "fontmap.json";

/// Find the override file to use, if any.
///
/// An explicitly configured path wins and is reported even when the file is
/// absent, so the caller's diagnostic names the location that was expected.
/// Otherwise the file is discovered next to the running executable, then in
/// the current working directory; absence at both locations is normal and
/// yields `None`.
pub fn discover(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let exe_sibling = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(OVERRIDE_FILE_NAME)));
    if let Some(path) = exe_sibling
        && path.exists()
    {
        return Some(path);
    }

    let cwd_file = std::env::current_dir()
        .ok()
        .map(|dir| dir.join(OVERRIDE_FILE_NAME));
    if let Some(path) = cwd_file
        && path.exists()
    {
        return Some(path);
    }

    None
}

/// Load override mappings from `path`, degrading gracefully.
///
/// Returns the mappings in a deterministic order. Any problem (unreadable
/// file, invalid JSON, non-object top level, non-string values) is logged
/// with `warn!` and reduces the contribution, never fails it.
pub fn load(path: &Path) -> Vec<(String, String)> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Override file {:?} unreadable, skipping: {}", path, e);
            return Vec::new();
        }
    };

    match parse(&contents) {
        Ok(mappings) => {
            log::info!(
                "Loaded {} override mapping(s) from {:?}",
                mappings.len(),
                path
            );
            mappings
        }
        Err(e) => {
            log::warn!("{e} ({:?})", path);
            Vec::new()
        }
    }
}

/// Parse override-file content into name/specifier pairs.
///
/// The top level must be a JSON object. String values become mappings;
/// values of any other type are skipped individually with a diagnostic.
pub fn parse(contents: &str) -> Result<Vec<(String, String)>, FontError> {
    let value: Value = serde_json::from_str(contents)
        .map_err(|e| FontError::OverrideFile(format!("invalid JSON: {e}")))?;

    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(FontError::OverrideFile(format!(
                "expected a JSON object of name/path pairs, got {}",
                json_type_name(&other)
            )));
        }
    };

    let mut mappings = Vec::with_capacity(object.len());
    for (name, value) in object {
        match value {
            Value::String(specifier) => mappings.push((name, specifier)),
            other => {
                log::warn!(
                    "Override entry '{}' has non-string value ({}), skipping",
                    name,
                    json_type_name(&other)
                );
            }
        }
    }
    Ok(mappings)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
