//! Error types for HtmlJp configuration

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key cannot be empty")]
    EmptyApiKey,

    #[error("At least one API key is required")]
    NoApiKeys,

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid configuration format: {message}")]
    InvalidFormat { message: String },

    #[error("Environment variable not found: {var}")]
    EnvVarNotFound { var: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Whether this error indicates caller misuse rather than an
    /// environmental problem (missing file, unset variable).
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, ConfigError::EmptyApiKey | ConfigError::NoApiKeys)
    }
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
