//! The ordered checks over a tracked-repos manifest
//!
//! Checks performed (in order):
//! 1. File can be read
//! 2. Content is valid JSON
//! 3. Top-level value is an array
//! 4. Every element is a two-element array of non-empty strings
//! 5. Neither the owner nor the name field contains a forward slash
//! 6. No duplicate entries (case-insensitive owner+name comparison)
//!
//! The first three are fatal: without readable, parseable array content no
//! further checking is possible. Everything after that accumulates, so one
//! run reports the complete defect list. The input is read once and never
//! mutated; all state lives in the returned [`Report`].

use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::entry::{check_element, json_type};
use crate::report::Report;

/// Validate the manifest file at `path`.
///
/// Readability is the first check, so an unreadable file produces a report
/// with a single fatal error rather than an `Err`.
pub fn validate_file(path: &Path) -> Report {
    let mut report = Report::new();
    match fs::read_to_string(path) {
        Ok(raw) => {
            report.pass(format!("File readable ({} bytes)", raw.len()));
            run_checks(&raw, &mut report);
        }
        Err(e) => report.error(format!("Cannot read file: {e}")),
    }
    report
}

/// Validate already-loaded manifest content (checks 2 through 6).
pub fn validate_source(raw: &str) -> Report {
    let mut report = Report::new();
    run_checks(raw, &mut report);
    report
}

fn run_checks(raw: &str, report: &mut Report) {
    let data: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            report.error(format!("JSON parse error: {e}"));
            return;
        }
    };
    report.pass("Valid JSON");

    let Some(elements) = data.as_array() else {
        report.error(format!(
            "Top-level value must be an array, got: {}",
            json_type(&data)
        ));
        return;
    };
    report.pass(format!("Top-level is an array ({} entries)", elements.len()));
    report.set_entry_count(elements.len());

    // Per-entry schema: validity is computed once here and the surviving
    // entries are exactly the ones eligible for duplicate detection.
    let errors_before = report.error_count();
    let mut valid = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        if let Some(entry) = check_element(index, element, report) {
            valid.push((index, entry));
        }
    }
    if report.error_count() == errors_before {
        report.pass("All entries pass schema check (two-element string arrays, no slash fields)");
    }

    // Duplicates: first occurrence of a key wins, every later one is flagged
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut duplicates = 0usize;
    for (index, entry) in &valid {
        match seen.get(&entry.duplicate_key()) {
            Some(&first_index) => {
                report.error_at(
                    *index,
                    format!(
                        "Duplicate entry at index {index}: {} (first seen at index {first_index} as {})",
                        elements[*index], elements[first_index]
                    ),
                );
                duplicates += 1;
            }
            None => {
                seen.insert(entry.duplicate_key(), *index);
            }
        }
    }
    if duplicates == 0 {
        report.pass(format!("No duplicates found ({} unique entries)", seen.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    fn error_messages(report: &Report) -> Vec<&str> {
        report.errors().map(|f| f.message.as_str()).collect()
    }

    #[test]
    fn test_single_valid_entry() {
        let report = validate_source(r#"[["foo","bar"]]"#);
        assert!(report.is_success());
        assert_eq!(report.entry_count(), Some(1));
        let passes: Vec<_> = report
            .findings()
            .iter()
            .filter(|f| f.severity == Severity::Pass)
            .map(|f| f.message.as_str())
            .collect();
        assert!(passes.iter().any(|m| m.contains("Valid JSON")));
        assert!(passes.iter().any(|m| m.contains("1 unique entries")));
    }

    #[test]
    fn test_invalid_json_is_fatal() {
        let report = validate_source("not json");
        assert!(!report.is_success());
        assert_eq!(report.error_count(), 1);
        assert!(error_messages(&report)[0].starts_with("JSON parse error"));
        // No schema or duplicate checks ran
        assert_eq!(report.findings().len(), 1);
        assert_eq!(report.entry_count(), None);
    }

    #[test]
    fn test_top_level_object_is_fatal() {
        let report = validate_source("{}");
        assert!(!report.is_success());
        assert!(error_messages(&report)[0].contains("must be an array, got: object"));
        // The Valid JSON pass preceded the fatal error, nothing after it
        assert_eq!(report.findings().len(), 2);
    }

    #[test]
    fn test_top_level_string_is_fatal() {
        let report = validate_source(r#""hello""#);
        assert!(error_messages(&report)[0].contains("got: string"));
    }

    #[test]
    fn test_empty_array_succeeds() {
        let report = validate_source("[]");
        assert!(report.is_success());
        assert_eq!(report.entry_count(), Some(0));
    }

    #[test]
    fn test_slash_in_owner_rejected() {
        let report = validate_source(r#"[["foo/bar","baz"]]"#);
        assert!(!report.is_success());
        assert_eq!(report.error_count(), 1);
        assert!(error_messages(&report)[0].contains("owner contains '/'"));
    }

    #[test]
    fn test_short_entry_rejected() {
        let report = validate_source(r#"[["a","b"],["a"]]"#);
        assert!(!report.is_success());
        let errors = error_messages(&report);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("entry[1]: expected 2 elements"));
    }

    #[test]
    fn test_case_insensitive_duplicate() {
        let report = validate_source(r#"[["Foo","Bar"],["foo","bar"]]"#);
        assert!(!report.is_success());
        let errors = error_messages(&report);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Duplicate entry at index 1"));
        assert!(errors[0].contains("first seen at index 0"));
        // Original casing preserved in the message
        assert!(errors[0].contains(r#"["Foo","Bar"]"#));
        assert_eq!(report.errors().next().and_then(|f| f.index), Some(1));
    }

    #[test]
    fn test_triplicate_reports_each_later_occurrence() {
        let report = validate_source(r#"[["a","b"],["a","b"],["A","B"]]"#);
        let errors = error_messages(&report);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("index 1"));
        assert!(errors[1].contains("index 2"));
        assert!(errors.iter().all(|m| m.contains("first seen at index 0")));
    }

    #[test]
    fn test_malformed_entries_excluded_from_duplicate_check() {
        // ["foo/x","bar"] twice: schema-invalid, so no duplicate error on top
        let report = validate_source(r#"[["foo/x","bar"],["foo/x","bar"]]"#);
        let errors = error_messages(&report);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|m| m.contains("owner contains '/'")));
    }

    #[test]
    fn test_all_errors_reported_in_one_run() {
        let report = validate_source(r#"[["foo","bar"],42,["a"],["x/y",""],["foo","bar"]]"#);
        let errors = error_messages(&report);
        // 42: not array; ["a"]: length; ["x/y",""]: slash + empty name; dup of ["foo","bar"]
        assert_eq!(errors.len(), 5);
        assert!(!report.is_success());
    }

    #[test]
    fn test_idempotent_on_same_input() {
        let raw = r#"[["foo","bar"],["Foo","Bar"],["a"]]"#;
        let first = validate_source(raw);
        let second = validate_source(raw);
        let msgs = |r: &Report| -> Vec<String> {
            r.findings().iter().map(|f| f.message.clone()).collect()
        };
        assert_eq!(msgs(&first), msgs(&second));
        assert_eq!(first.is_success(), second.is_success());
    }

    #[test]
    fn test_validate_file_missing_path() {
        let report = validate_file(Path::new("/nonexistent/tracked_repos.json"));
        assert!(!report.is_success());
        assert_eq!(report.findings().len(), 1);
        assert!(error_messages(&report)[0].starts_with("Cannot read file"));
    }

    #[test]
    fn test_schema_pass_line_only_when_clean() {
        let clean = validate_source(r#"[["foo","bar"]]"#);
        assert!(clean
            .findings()
            .iter()
            .any(|f| f.message.contains("All entries pass schema check")));

        let dirty = validate_source(r#"[["foo"]]"#);
        assert!(!dirty
            .findings()
            .iter()
            .any(|f| f.message.contains("All entries pass schema check")));
    }
}
