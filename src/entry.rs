//! Tracked-repository entries and their schema checks
//!
//! A dataset element is expected to be `["owner", "name"]`: a two-element
//! array of non-empty, slash-free strings. [`check_element`] flags every
//! violation it finds and returns an [`Entry`] only when the element passed
//! all checks, so the returned value doubles as the eligibility token for
//! duplicate detection.

use serde_json::Value;
use std::fmt;

use crate::report::Report;

/// One tracked repository, `(owner, name)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub owner: String,
    pub name: String,
}

impl Entry {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Case-insensitive key used for duplicate detection. Original casing is
    /// preserved everywhere else; the key is not trimmed.
    pub fn duplicate_key(&self) -> String {
        format!("{}/{}", self.owner.to_lowercase(), self.name.to_lowercase())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// JSON type name for error messages
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Run the per-entry schema checks on one dataset element.
///
/// Every violation is recorded against `index`; a non-array or wrong-length
/// element skips the field checks. Returns `Some` iff the element passed
/// everything.
pub fn check_element(index: usize, value: &Value, report: &mut Report) -> Option<Entry> {
    let loc = format!("entry[{index}]");

    let Some(items) = value.as_array() else {
        report.error_at(
            index,
            format!("{loc}: expected array, got {}: {value}", json_type(value)),
        );
        return None;
    };

    if items.len() != 2 {
        report.error_at(
            index,
            format!("{loc}: expected 2 elements, got {}: {value}", items.len()),
        );
        return None;
    }

    let owner = items[0].as_str();
    let name = items[1].as_str();
    let mut valid = true;

    if !owner.is_some_and(|s| !s.trim().is_empty()) {
        report.error_at(
            index,
            format!("{loc}: owner must be a non-empty string: {value}"),
        );
        valid = false;
    }
    if !name.is_some_and(|s| !s.trim().is_empty()) {
        report.error_at(
            index,
            format!("{loc}: name must be a non-empty string: {value}"),
        );
        valid = false;
    }

    // Catches "owner/name" pasted as a single string
    if let Some(owner) = owner {
        if owner.contains('/') {
            report.error_at(
                index,
                format!(
                    "{loc}: owner contains '/', did you mean to split \"{owner}\" into owner and name? Value: {value}"
                ),
            );
            valid = false;
        }
    }
    if let Some(name) = name {
        if name.contains('/') {
            report.error_at(
                index,
                format!(
                    "{loc}: name contains '/', did you mean to split \"{name}\" into owner and name? Value: {value}"
                ),
            );
            valid = false;
        }
    }

    match (owner, name) {
        (Some(owner), Some(name)) if valid => Some(Entry::new(owner, name)),
        _ => None,
    }
}
