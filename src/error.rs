//! Error types for the validator
//!
//! Validation defects are findings, not errors: the validator reports them
//! through [`crate::report::Report`]. This enum covers failures around the
//! run itself, configuration loading and input discovery.

use thiserror::Error;

/// Result type for validator operations
pub type Result<T> = std::result::Result<T, ValidatorError>;

#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("manifest file '{file_name}' not found in {start} or any parent directory")]
    InputNotFound { file_name: String, start: String },

    #[error("Config error: {0}")]
    Config(#[from] config_crate::ConfigError),
}
