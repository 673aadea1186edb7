//! Error types for configuration parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for manifest and attribute parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// The manifest file could not be read
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// A color attribute is not a hex color
    #[error("Invalid color '{value}': {source}")]
    InvalidColor {
        /// Raw attribute value
        value: String,
        /// Why it was rejected
        source: meterkit_core::ColorParseError,
    },

    /// A dimension attribute has no usable number or unit
    #[error("Invalid dimension '{value}': expected a number with optional dp, sp or px suffix")]
    InvalidDimension {
        /// Raw attribute value
        value: String,
    },

    /// A value parsed but is out of range
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}

impl ParseError {
    pub(crate) fn invalid_value(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
