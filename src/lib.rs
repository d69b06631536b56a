//! Tracked Repository Manifest Validator
//!
//! Validates `tracked_repos.json`, the manifest of tracked source
//! repositories, against the rules enforced by CI.
//!
//! ## Checks (in order)
//!
//! 1. File can be read
//! 2. Content is valid JSON
//! 3. Top-level value is an array
//! 4. Every element is a two-element array of non-empty strings
//! 5. Neither the owner nor the name field contains a forward slash
//! 6. No duplicate entries (case-insensitive owner+name comparison)
//!
//! ## Architecture
//!
//! ```text
//! raw bytes ──▶ validator (six ordered checks) ──▶ Report of Findings
//!                                                      │
//!                           output::Printer ◀──────────┘
//!                           (stdout/stderr, colour, exit code in the bin)
//! ```
//!
//! The validator is a pure function from input text to a [`Report`]; the
//! `validate-tracked-repos` binary layers file discovery, colour and exit
//! codes on top.

pub mod config;
pub mod entry;
pub mod error;
pub mod output;
pub mod report;
pub mod validator;

pub use config::{ColorChoice, ValidatorConfig};
pub use entry::Entry;
pub use error::{Result, ValidatorError};
pub use output::Printer;
pub use report::{Finding, Report, Severity};
pub use validator::{validate_file, validate_source};
