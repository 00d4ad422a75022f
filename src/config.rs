//! Configuration loading via `ortho-config`.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::region::Region;
use crate::report::{IncompletePolicy, OutputFormat};

/// Listing defaults derived from environment variables and configuration
/// files.
#[derive(Clone, Debug, Deserialize, OrthoConfig, PartialEq, Eq)]
#[ortho_config(
    prefix = "EC2_MODEL",
    discovery(
        app_name = "ec2-model",
        env_var = "EC2_MODEL_CONFIG_PATH",
        config_file_name = "ec2-model.toml",
        dotfile_name = ".ec2-model.toml",
        project_file_name = "ec2-model.toml"
    )
)]
pub struct ModelConfig {
    /// Region applied to documents and items that do not name one.
    pub default_region: Option<String>,
    /// Whether to drop entities without a natural key instead of failing the
    /// sort.
    #[ortho_config(default = false)]
    pub skip_incomplete: bool,
    /// Output format for listings: `text` or `json`.
    #[ortho_config(default = "text".to_owned())]
    pub output_format: String,
}

/// Metadata for a configuration field, used to generate actionable error messages.
struct FieldMetadata {
    description: &'static str,
    env_var: &'static str,
    toml_key: &'static str,
}

impl FieldMetadata {
    const fn new(description: &'static str, env_var: &'static str, toml_key: &'static str) -> Self {
        Self {
            description,
            env_var,
            toml_key,
        }
    }

    fn invalid(&self, detail: &str) -> ConfigError {
        ConfigError::InvalidField(format!(
            "invalid {}: {detail}; set {} or {} in ec2-model.toml",
            self.description, self.env_var, self.toml_key
        ))
    }
}

const DEFAULT_REGION: FieldMetadata =
    FieldMetadata::new("default region", "EC2_MODEL_DEFAULT_REGION", "default_region");
const OUTPUT_FORMAT: FieldMetadata =
    FieldMetadata::new("output format", "EC2_MODEL_OUTPUT_FORMAT", "output_format");

impl ModelConfig {
    /// Loads configuration without attempting to parse CLI arguments. Values
    /// merge defaults, configuration files, and environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the merge fails.
    pub fn load_without_cli_args() -> Result<Self, ConfigError> {
        Self::load_from_iter([std::ffi::OsString::from("ec2-model")])
            .map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Returns the configured default region, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when the region is blank.
    pub fn default_region(&self) -> Result<Option<Region>, ConfigError> {
        self.default_region
            .as_deref()
            .map(Region::new)
            .transpose()
            .map_err(|err| DEFAULT_REGION.invalid(&err.to_string()))
    }

    /// Returns the configured output format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] for anything but `text` or `json`.
    pub fn output_format(&self) -> Result<OutputFormat, ConfigError> {
        self.output_format
            .parse()
            .map_err(|err: crate::report::ReportError| OUTPUT_FORMAT.invalid(&err.to_string()))
    }

    /// Returns the policy for entities lacking a natural key.
    #[must_use]
    pub const fn incomplete_policy(&self) -> IncompletePolicy {
        if self.skip_incomplete {
            IncompletePolicy::Skip
        } else {
            IncompletePolicy::Fail
        }
    }

    /// Performs semantic validation. Error messages name the environment
    /// variable and configuration key to fix.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when a field is unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.default_region()?;
        self.output_format()?;
        Ok(())
    }
}

/// Errors raised during configuration loading and validation.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// Indicates a configuration field holds an unusable value.
    #[error("invalid configuration field: {0}")]
    InvalidField(String),
    /// Surfaces errors from the `ortho-config` loader.
    #[error("configuration parsing failed: {0}")]
    Parse(String),
}

impl From<ortho_config::OrthoError> for ConfigError {
    fn from(value: ortho_config::OrthoError) -> Self {
        Self::Parse(value.to_string())
    }
}
