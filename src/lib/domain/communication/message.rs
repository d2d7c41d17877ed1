//! Email message

use super::email_addresses::Mailbox;

/// Content type of a plain text body
pub const TEXT_PLAIN: &str = "text/plain";

/// Content type of an HTML body
pub const TEXT_HTML: &str = "text/html";

/// The body of an email message
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    /// A plain text only message
    Plain(String),

    /// An HTML message with a plain text alternative part
    Html {
        /// The HTML part, with styles inlined
        html: String,

        /// The plain text alternative
        alternative: String,
    },
}

impl Default for Body {
    fn default() -> Self {
        Body::Plain(String::new())
    }
}

/// Email message
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    /// The sender of the email
    pub from: Option<Mailbox>,

    /// Where replies should go
    pub reply_to: Option<Mailbox>,

    /// The recipient of the email
    pub to: Option<Mailbox>,

    /// The subject of the email
    pub subject: Option<String>,

    /// The body of the email
    pub body: Body,
}

impl Message {
    /// Content type of the main body
    pub fn content_type(&self) -> &'static str {
        match self.body {
            Body::Plain(_) => TEXT_PLAIN,
            Body::Html { .. } => TEXT_HTML,
        }
    }

    /// The main body: the HTML part for HTML messages, the text otherwise
    pub fn body(&self) -> &str {
        match &self.body {
            Body::Plain(text) => text,
            Body::Html { html, .. } => html,
        }
    }

    /// The plain text part of the message
    pub fn plain_text(&self) -> &str {
        match &self.body {
            Body::Plain(text) => text,
            Body::Html { alternative, .. } => alternative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message_is_empty_plain_text() {
        let message = Message::default();

        assert_eq!(message.content_type(), TEXT_PLAIN);
        assert_eq!(message.body(), "");
        assert!(message.from.is_none());
    }

    #[test]
    fn test_html_message_parts() {
        let message = Message {
            body: Body::Html {
                html: "<p>Hi</p>".to_string(),
                alternative: "Hi".to_string(),
            },
            ..Default::default()
        };

        assert_eq!(message.content_type(), TEXT_HTML);
        assert_eq!(message.body(), "<p>Hi</p>");
        assert_eq!(message.plain_text(), "Hi");
    }
}
