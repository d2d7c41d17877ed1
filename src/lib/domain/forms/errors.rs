//! Form errors

use thiserror::Error;

/// Errors raised while configuring or rendering a form field
#[derive(Debug, Error)]
pub enum FormError {
    /// Options failed to resolve: unknown name or disallowed value
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    /// The date pattern uses a field we cannot format
    #[error("unsupported date pattern field '{0}'")]
    UnsupportedPattern(String),
}
