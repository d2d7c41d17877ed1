//! Email layout templates

use askama::Template;

#[cfg(test)]
use mockall::mock;

use super::errors::TemplateError;

/// Path of the layout compiled into the crate
pub const DEFAULT_LAYOUT_PATH: &str = "emails/layout.html";

/// Renders a layout template around email content
pub trait TemplateRenderer: Send + Sync + 'static {
    /// Renders the template at `path`.
    ///
    /// # Arguments
    /// * `path` - The template to render.
    /// * `content` - The HTML content of the email, exposed as `content`.
    /// * `css` - The stylesheet contents, exposed as `css`.
    ///
    /// # Returns
    /// The rendered HTML document.
    fn render(&self, path: &str, content: &str, css: &str) -> Result<String, TemplateError>;
}

#[cfg(test)]
mock! {
    pub TemplateRenderer {}

    impl TemplateRenderer for TemplateRenderer {
        fn render(&self, path: &str, content: &str, css: &str) -> Result<String, TemplateError>;
    }
}

/// The default email layout
#[derive(Debug, Template)]
#[template(path = "emails/layout.html")]
pub struct DefaultLayoutTemplate<'a> {
    /// HTML content of the email
    pub content: &'a str,

    /// Stylesheet contents
    pub css: &'a str,
}

/// Renderer serving the layout compiled into the crate
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinRenderer;

impl TemplateRenderer for BuiltinRenderer {
    fn render(&self, path: &str, content: &str, css: &str) -> Result<String, TemplateError> {
        if path != DEFAULT_LAYOUT_PATH {
            return Err(TemplateError::NotFound(path.to_string()));
        }

        Ok(DefaultLayoutTemplate { content, css }.render()?)
    }
}
