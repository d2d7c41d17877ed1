//! Message factory: builds messages wrapped in the email layout

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use css_inline::CSSInliner;
use tracing::{debug, trace};

use super::{
    email_addresses::{EmailAddressError, Mailbox},
    errors::MessageError,
    message::{Body, Message},
    plain_text::convert_to_plain_text,
    templates::TemplateRenderer,
};

/// Builds outgoing messages with default addresses applied
#[derive(Debug)]
pub struct MessageFactory<R>
where
    R: TemplateRenderer,
{
    renderer: Arc<R>,
    template_path: String,
    css_path: PathBuf,
    sender: Option<Mailbox>,
    reply_to: Option<Mailbox>,
    to: Option<Mailbox>,
}

impl<R> MessageFactory<R>
where
    R: TemplateRenderer,
{
    /// Creates a new message factory.
    ///
    /// # Arguments
    /// * `renderer` - Renders the layout template.
    /// * `template_path` - The layout template every HTML message is wrapped in.
    /// * `css_path` - Stylesheet passed to the layout and inlined afterwards.
    pub fn new(renderer: Arc<R>, template_path: &str, css_path: impl AsRef<Path>) -> Self {
        Self {
            renderer,
            template_path: template_path.to_string(),
            css_path: css_path.as_ref().to_path_buf(),
            sender: None,
            reply_to: None,
            to: None,
        }
    }

    /// Sets the default sender
    pub fn set_default_sender(
        &mut self,
        email: &str,
        name: Option<&str>,
    ) -> Result<(), EmailAddressError> {
        self.sender = Some(Mailbox::new(email, name)?);

        Ok(())
    }

    /// Sets the default reply-to
    pub fn set_default_reply_to(
        &mut self,
        email: &str,
        name: Option<&str>,
    ) -> Result<(), EmailAddressError> {
        self.reply_to = Some(Mailbox::new(email, name)?);

        Ok(())
    }

    /// Sets the default recipient
    pub fn set_default_to(
        &mut self,
        email: &str,
        name: Option<&str>,
    ) -> Result<(), EmailAddressError> {
        self.to = Some(Mailbox::new(email, name)?);

        Ok(())
    }

    /// Creates an empty message carrying the default addresses
    pub fn create_default_message(&self) -> Message {
        Message {
            from: self.sender.clone(),
            reply_to: self.reply_to.clone(),
            to: self.to.clone(),
            ..Default::default()
        }
    }

    /// Creates an HTML message.
    ///
    /// When `plain_text` is `None` the alternative part is derived from `html`.
    pub fn create_html_message(
        &self,
        subject: Option<&str>,
        html: Option<&str>,
        plain_text: Option<&str>,
    ) -> Result<Message, MessageError> {
        self.create_message(subject, html, plain_text)
    }

    /// Creates a plain text message
    pub fn create_plain_text_message(
        &self,
        subject: Option<&str>,
        body: Option<&str>,
    ) -> Result<Message, MessageError> {
        self.create_message(subject, None, body)
    }

    fn create_message(
        &self,
        subject: Option<&str>,
        html: Option<&str>,
        alternative: Option<&str>,
    ) -> Result<Message, MessageError> {
        let mut message = self.create_default_message();

        if let Some(subject) = subject.filter(|s| !s.is_empty()) {
            message.subject = Some(subject.to_string());
        }

        let html = html.unwrap_or_default();

        if html.is_empty() {
            if let Some(text) = alternative.filter(|a| !a.is_empty()) {
                message.body = Body::Plain(text.to_string());

                return Ok(message);
            }
        }

        let alternative = match alternative {
            Some(alternative) => alternative.to_string(),
            None => convert_to_plain_text(html),
        };

        message.body = Body::Html {
            html: self.wrap_in_template(html)?,
            alternative,
        };

        Ok(message)
    }

    /// Wraps the content in the email layout and inlines the stylesheet
    pub fn wrap_in_template(&self, content: &str) -> Result<String, MessageError> {
        let css = fs::read_to_string(&self.css_path).map_err(|source| {
            MessageError::StylesheetUnreadable {
                path: self.css_path.clone(),
                source,
            }
        })?;

        trace!("rendering {} with {}", self.template_path, self.css_path.display());

        let html = self.renderer.render(&self.template_path, content, &css)?;

        let inliner = CSSInliner::options()
            .load_remote_stylesheets(false)
            .keep_style_tags(true)
            .extra_css(Some(css.into()))
            .build();

        let inlined = inliner.inline(&html)?;

        debug!("wrapped {} bytes of content in {}", content.len(), self.template_path);

        Ok(inlined)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, io::Write};

    use tempfile::NamedTempFile;
    use testresult::TestResult;

    use crate::domain::communication::{
        errors::TemplateError,
        message::{TEXT_HTML, TEXT_PLAIN},
        templates::{BuiltinRenderer, MockTemplateRenderer, DEFAULT_LAYOUT_PATH},
    };

    use super::*;

    fn stylesheet(css: &str) -> TestResult<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(css.as_bytes())?;

        Ok(file)
    }

    fn layout_renderer() -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();

        renderer.expect_render().returning(|_, content, css| {
            Ok(format!(
                "<html><head><style>{css}</style></head><body>{content}</body></html>"
            ))
        });

        renderer
    }

    #[test]
    fn test_plain_text_message() -> TestResult {
        let css = stylesheet("")?;
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().times(0);

        let factory = MessageFactory::new(Arc::new(renderer), "layout.html", css.path());

        let message = factory.create_plain_text_message(Some("Greeting"), Some("Hello"))?;

        assert_eq!(message.content_type(), TEXT_PLAIN);
        assert!(message.body().contains("Hello"));
        assert_eq!(message.subject.as_deref(), Some("Greeting"));

        Ok(())
    }

    #[test]
    fn test_html_message_derives_plain_text_alternative() -> TestResult {
        let css = stylesheet("a { color: red; }")?;
        let factory = MessageFactory::new(Arc::new(layout_renderer()), "layout.html", css.path());

        let message = factory.create_html_message(
            Some("Hi"),
            Some(r#"<p>Hi <a href="http://x">there</a></p>"#),
            None,
        )?;

        assert_eq!(message.content_type(), TEXT_HTML);
        assert_eq!(message.plain_text(), "Hi there (http://x)");

        Ok(())
    }

    #[test]
    fn test_html_message_keeps_explicit_alternative() -> TestResult {
        let css = stylesheet("")?;
        let factory = MessageFactory::new(Arc::new(layout_renderer()), "layout.html", css.path());

        let message =
            factory.create_html_message(None, Some("<p>Rich</p>"), Some("Plain version"))?;

        assert_eq!(message.plain_text(), "Plain version");
        assert!(message.body().contains("Rich"));
        assert_eq!(message.subject, None);

        Ok(())
    }

    #[test]
    fn test_html_is_rendered_with_css_and_inlined() -> TestResult {
        let css = stylesheet("p { color: red; }")?;
        let path = css.path().to_path_buf();

        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .times(1)
            .withf(|path, content, css| {
                path.to_string() == "emails/custom.html"
                    && content.to_string() == "<p>Styled</p>"
                    && css.to_string() == "p { color: red; }"
            })
            .returning(|_, content, _| Ok(format!("<html><body>{content}</body></html>")));

        let factory = MessageFactory::new(Arc::new(renderer), "emails/custom.html", &path);

        let html = factory.wrap_in_template("<p>Styled</p>")?;

        assert!(html.contains(r#"<p style="color:"#));
        assert!(html.contains("red"));
        assert!(html.contains("Styled</p>"));

        Ok(())
    }

    #[test]
    fn test_stylesheet_is_kept_alongside_inline_styles() -> TestResult {
        let css = stylesheet("td.content { padding: 8px; }")?;
        let factory = MessageFactory::new(Arc::new(BuiltinRenderer), DEFAULT_LAYOUT_PATH, css.path());

        let message = factory.create_html_message(None, Some("<p>Body</p>"), None)?;

        assert!(message.body().contains("<style"));
        assert!(message.body().contains("td.content { padding: 8px; }"));
        assert!(message.body().contains(r#"style="padding:"#));
        assert_eq!(message.plain_text(), "Body");

        Ok(())
    }

    #[test]
    fn test_media_queries_survive_inlining() -> TestResult {
        let css = stylesheet("p{color:red} @media (max-width:600px){p{font-size:20px}}")?;
        let factory = MessageFactory::new(Arc::new(layout_renderer()), "layout.html", css.path());

        let html = factory.wrap_in_template("<p>x</p>")?;

        assert!(html.contains("@media (max-width:600px)"));
        assert!(html.contains(r#"<p style="color:"#));

        Ok(())
    }

    #[test]
    fn test_empty_plain_text_message_falls_back_to_html() -> TestResult {
        let css = stylesheet("")?;
        let factory = MessageFactory::new(Arc::new(layout_renderer()), "layout.html", css.path());

        let message = factory.create_plain_text_message(Some("Empty"), None)?;

        assert_eq!(message.content_type(), TEXT_HTML);
        assert_eq!(message.plain_text(), "");

        Ok(())
    }

    #[test]
    fn test_default_sender_with_name_applies_to_every_message() -> TestResult {
        let css = stylesheet("")?;
        let mut factory =
            MessageFactory::new(Arc::new(layout_renderer()), "layout.html", css.path());

        factory.set_default_sender("noreply@example.com", Some("Example"))?;

        let first = factory.create_plain_text_message(None, Some("one"))?;
        let second = factory.create_html_message(None, Some("<p>two</p>"), None)?;

        for message in [first, second] {
            let sender = message.from.expect("missing sender");

            assert_eq!(
                sender.to_map(),
                BTreeMap::from([("noreply@example.com".to_string(), Some("Example".to_string()))])
            );
        }

        Ok(())
    }

    #[test]
    fn test_default_reply_to_and_to() -> TestResult {
        let css = stylesheet("")?;
        let mut factory =
            MessageFactory::new(Arc::new(layout_renderer()), "layout.html", css.path());

        factory.set_default_reply_to("support@example.com", None)?;
        factory.set_default_to("team@example.com", Some("Team"))?;

        let message = factory.create_default_message();

        assert_eq!(message.from, None);
        assert_eq!(
            message.reply_to.map(|m| m.to_string()),
            Some("support@example.com".to_string())
        );
        assert_eq!(
            message.to.map(|m| m.to_string()),
            Some("Team <team@example.com>".to_string())
        );

        Ok(())
    }

    #[test]
    fn test_invalid_default_sender_is_rejected() -> TestResult {
        let css = stylesheet("")?;
        let mut factory =
            MessageFactory::new(Arc::new(layout_renderer()), "layout.html", css.path());

        let result = factory.set_default_sender("not an address", None);

        assert_eq!(result, Err(EmailAddressError::InvalidEmailAddress));
        assert_eq!(factory.create_default_message().from, None);

        Ok(())
    }

    #[test]
    fn test_missing_stylesheet() {
        let factory = MessageFactory::new(
            Arc::new(layout_renderer()),
            "layout.html",
            "/nonexistent/email.css",
        );

        let result = factory.create_html_message(None, Some("<p>Hi</p>"), None);

        assert!(matches!(result, Err(MessageError::StylesheetUnreadable { .. })));
    }

    #[test]
    fn test_template_error_is_propagated() -> TestResult {
        let css = stylesheet("")?;
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .returning(|path, _, _| Err(TemplateError::NotFound(path.to_string())));

        let factory = MessageFactory::new(Arc::new(renderer), "missing.html", css.path());

        let result = factory.create_html_message(None, Some("<p>Hi</p>"), None);

        assert!(matches!(
            result,
            Err(MessageError::Template(TemplateError::NotFound(_)))
        ));

        Ok(())
    }
}
