//! Error types for helixterm.
//!
//! All fallible operations return `Result<T, HelixError>` instead of
//! panicking. The animation itself has no error conditions; everything here
//! belongs to the surrounding glue (terminal I/O, configuration).

use thiserror::Error;

/// Result type alias for helixterm operations.
pub type HelixResult<T> = Result<T, HelixError>;

/// Unified error type for all helixterm operations.
#[derive(Debug, Error)]
pub enum HelixError {
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Terminal or file I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HelixError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
