//! Error types for the communication module

use std::path::PathBuf;

use css_inline::InlineError;
use lettre::{address::AddressError, error::Error as LettreError};
use thiserror::Error;
use tracing::debug;

use super::email_addresses::EmailAddressError;

/// Template rendering errors
#[derive(Debug, Error)]
pub enum TemplateError {
    /// No template is registered under the given path
    #[error("template not found: {0}")]
    NotFound(String),

    /// The template engine failed to render
    #[error("could not render template")]
    Render(#[source] anyhow::Error),
}

impl From<tera::Error> for TemplateError {
    fn from(err: tera::Error) -> Self {
        debug!("tera::Error -> TemplateError");

        if let tera::ErrorKind::TemplateNotFound(name) = &err.kind {
            return TemplateError::NotFound(name.clone());
        }

        TemplateError::Render(err.into())
    }
}

impl From<askama::Error> for TemplateError {
    fn from(err: askama::Error) -> Self {
        debug!("askama::Error -> TemplateError");

        TemplateError::Render(err.into())
    }
}

/// Errors that can occur while building a message
#[derive(Debug, Error)]
pub enum MessageError {
    /// The stylesheet could not be read
    #[error("could not read stylesheet {path}")]
    StylesheetUnreadable {
        /// Path of the stylesheet
        path: PathBuf,

        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The layout template could not be rendered
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The stylesheet could not be inlined
    #[error("could not inline css")]
    Inline(#[from] InlineError),

    /// Invalid email address
    #[error("invalid email address")]
    InvalidEmail,

    /// The wire message could not be built
    #[error("could not build message")]
    Build(#[source] LettreError),
}

impl From<EmailAddressError> for MessageError {
    fn from(_err: EmailAddressError) -> Self {
        debug!("EmailAddressError -> MessageError");

        MessageError::InvalidEmail
    }
}

impl From<AddressError> for MessageError {
    fn from(_err: AddressError) -> Self {
        debug!("AddressError -> MessageError");

        MessageError::InvalidEmail
    }
}

impl From<LettreError> for MessageError {
    fn from(err: LettreError) -> Self {
        debug!("lettre::error::Error -> MessageError");

        MessageError::Build(err)
    }
}
