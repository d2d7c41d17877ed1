//! Template rendering backed by Tera

use std::path::Path;

use tera::{Context, Tera};
use tracing::debug;

use crate::domain::communication::{errors::TemplateError, templates::TemplateRenderer};

/// Renders layouts loaded from a template directory
#[derive(Debug)]
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    /// Loads every template below `template_dir`.
    ///
    /// Templates are addressed by their path relative to the directory, e.g.
    /// `emails/layout.html`.
    pub fn new(template_dir: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let glob = template_dir.as_ref().join("**").join("*");
        let tera = Tera::new(&glob.to_string_lossy())?;

        debug!(
            "loaded {} templates from {}",
            tera.get_template_names().count(),
            template_dir.as_ref().display()
        );

        Ok(Self { tera })
    }

    /// Builds a renderer from in-memory templates
    pub fn from_raw<'a>(
        templates: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates)?;

        Ok(Self { tera })
    }
}

impl TemplateRenderer for TeraRenderer {
    fn render(&self, path: &str, content: &str, css: &str) -> Result<String, TemplateError> {
        let mut ctx = Context::new();
        ctx.insert("content", content);
        ctx.insert("css", css);

        Ok(self.tera.render(path, &ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use testresult::TestResult;

    use super::*;

    const LAYOUT: &str =
        "<html><head><style>{{ css | safe }}</style></head><body>{{ content | safe }}</body></html>";

    #[test]
    fn test_render_passes_content_and_css() -> TestResult {
        let renderer = TeraRenderer::from_raw([("emails/layout.html", LAYOUT)])?;

        let html = renderer.render("emails/layout.html", "<p>Hi &amp; bye</p>", "p{margin:0}")?;

        assert_eq!(
            html,
            "<html><head><style>p{margin:0}</style></head><body><p>Hi &amp; bye</p></body></html>"
        );

        Ok(())
    }

    #[test]
    fn test_unknown_template() -> TestResult {
        let renderer = TeraRenderer::from_raw([("emails/layout.html", LAYOUT)])?;

        let result = renderer.render("emails/missing.html", "", "");

        assert!(matches!(result, Err(TemplateError::NotFound(name)) if name == "emails/missing.html"));

        Ok(())
    }

    #[test]
    fn test_loads_templates_from_directory() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::create_dir_all(dir.path().join("emails"))?;
        fs::write(dir.path().join("emails/layout.html"), LAYOUT)?;

        let renderer = TeraRenderer::new(dir.path())?;
        let html = renderer.render("emails/layout.html", "<b>x</b>", "")?;

        assert!(html.contains("<body><b>x</b></body>"));

        Ok(())
    }
}
