//! Error types for the roomscan library

use thiserror::Error;

/// Result type alias for roomscan operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for room scoring operations
///
/// All variants are raised while constructing catalogs, configurations or
/// engines. Scoring itself performs no I/O and cannot fail for valid inputs.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A catalog entry carries a hex color that cannot be decoded
    #[error("Invalid hex color \"{value}\": {reason}")]
    InvalidHexColor { value: String, reason: String },

    /// The reference color catalog is unusable
    #[error("Catalog error: {reason}")]
    CatalogError { reason: String },

    /// A configuration value is outside its valid range
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration could not be loaded or stored
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AnalysisError {
    /// Create a hex decoding error with context
    pub fn invalid_hex(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHexColor {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
