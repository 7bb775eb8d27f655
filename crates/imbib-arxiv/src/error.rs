//! Error types for imbib-arxiv

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for arXiv backend operations
pub type Result<T> = std::result::Result<T, ArxivError>;

/// Opaque failure reported by an authoritative resolver.
///
/// Handed back to the caller exactly as the resolver produced it.
pub type ResolverError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for arXiv backend operations
#[derive(Error, Debug)]
pub enum ArxivError {
    /// The response body is not well-formed markup
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl ArxivError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        ArxivError::MalformedResponse {
            message: message.into(),
        }
    }
}
