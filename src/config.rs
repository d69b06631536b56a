//! Configuration management for the validator
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (tracked-repos.toml)
//! - Environment variables (TRACKED_REPOS_*)
//!
//! ## Example config file (tracked-repos.toml):
//! ```toml
//! [input]
//! file_name = "tracked_repos.json"
//!
//! [output]
//! color = "auto"
//! ```

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, ValidatorError};

/// Main configuration for the validator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Input manifest settings
    #[serde(default)]
    pub input: InputConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input manifest configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// File name to search for when no explicit path is given
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// When to colourize output
    #[serde(default)]
    pub color: ColorChoice,
}

/// Colour behaviour for the terminal renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour only when both stdout and stderr are terminals
    #[default]
    Auto,
    Always,
    Never,
}

fn default_file_name() -> String {
    "tracked_repos.json".to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from default locations
        let config_locations = ["tracked-repos.toml", ".tracked-repos.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "familiar", "tracked-repos")
        {
            let xdg_config = config_dir.config_dir().join("tracked-repos.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        // Load from specified path
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        // Load from environment variables (TRACKED_REPOS_*)
        builder = builder.add_source(
            Environment::with_prefix("TRACKED_REPOS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Locate the input manifest, searching `start` and its ancestors, so
    /// the validator can run from any subdirectory of the repository.
    pub fn locate_input(&self, start: &Path) -> Result<PathBuf> {
        let mut dir = Some(start);
        while let Some(d) = dir {
            let candidate = d.join(&self.input.file_name);
            if candidate.is_file() {
                return Ok(candidate);
            }
            dir = d.parent();
        }
        Err(ValidatorError::InputNotFound {
            file_name: self.input.file_name.clone(),
            start: start.display().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert_eq!(config.input.file_name, "tracked_repos.json");
        assert_eq!(config.output.color, ColorChoice::Auto);
    }

    #[test]
    fn test_serialize_config() {
        let config = ValidatorConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[input]"));
        assert!(toml_str.contains("[output]"));
    }

    #[test]
    fn test_color_choice_lowercase() {
        let config: OutputConfig = toml::from_str(r#"color = "never""#).unwrap();
        assert_eq!(config.color, ColorChoice::Never);
    }

    #[test]
    fn test_locate_input_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("tracked_repos.json"), "[]").unwrap();

        let config = ValidatorConfig::default();
        let found = config.locate_input(&nested).unwrap();
        assert_eq!(found, dir.path().join("tracked_repos.json"));
    }

    #[test]
    fn test_locate_input_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ValidatorConfig::default();
        config.input.file_name = "definitely_not_here.json".to_string();
        let err = config.locate_input(dir.path()).unwrap_err();
        assert!(err.to_string().contains("definitely_not_here.json"));
    }
}
