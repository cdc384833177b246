//! Error types for porter
//!
//! A single domain error enum shared by every layer. Expected conditions
//! (cache miss, admission rejection) are plain return values and never
//! appear here; the enum covers genuine failures only.

use thiserror::Error;

/// Result type alias for porter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Domain error for all porter operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation failed
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Cache region operation failed
    #[error("Cache error: {message}")]
    Cache {
        /// Error message
        message: String,
    },

    /// Login admission guard failure (not a rejection - rejections are
    /// decisions, not errors)
    #[error("Throttle error: {message}")]
    Throttle {
        /// Error message
        message: String,
    },

    /// Downstream authentication refused the credentials
    #[error("Authentication error: {message}")]
    Authentication {
        /// Error message
        message: String,
    },

    /// Invariant violation inside porter itself
    #[error("Internal error: {message}")]
    Internal {
        /// Error message
        message: String,
    },

    /// Generic string error
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with a source
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a cache error
    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Create a throttle error
    pub fn throttle(message: impl Into<String>) -> Self {
        Self::Throttle {
            message: message.into(),
        }
    }

    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}
