//! Mail configuration

use std::{path::PathBuf, sync::Arc};

use clap::Parser;

use crate::domain::communication::{
    email_addresses::EmailAddressError,
    templates::{TemplateRenderer, DEFAULT_LAYOUT_PATH},
    MessageFactory,
};

/// Message factory configuration
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
pub struct MailConfig {
    /// Directory containing the email templates; the built-in layout is used when unset
    #[clap(long, env = "MAIL_TEMPLATE_DIR")]
    pub template_dir: Option<PathBuf>,

    /// The layout template HTML messages are wrapped in
    #[clap(long, env = "MAIL_TEMPLATE_PATH", default_value = DEFAULT_LAYOUT_PATH)]
    pub template_path: String,

    /// The stylesheet inlined into HTML messages
    #[clap(long, env = "MAIL_CSS_PATH")]
    pub css_path: PathBuf,

    /// The default sender address
    #[clap(long, env = "MAIL_SENDER")]
    pub sender: Option<String>,

    /// The default sender name
    #[clap(long, env = "MAIL_SENDER_NAME")]
    pub sender_name: Option<String>,

    /// The default reply-to address
    #[clap(long, env = "MAIL_REPLY_TO")]
    pub reply_to: Option<String>,

    /// The default reply-to name
    #[clap(long, env = "MAIL_REPLY_TO_NAME")]
    pub reply_to_name: Option<String>,

    /// The default recipient address
    #[clap(long, env = "MAIL_TO")]
    pub to: Option<String>,

    /// The default recipient name
    #[clap(long, env = "MAIL_TO_NAME")]
    pub to_name: Option<String>,
}

impl MailConfig {
    /// Creates a message factory with the configured defaults applied
    pub fn message_factory<R>(
        &self,
        renderer: Arc<R>,
    ) -> Result<MessageFactory<R>, EmailAddressError>
    where
        R: TemplateRenderer,
    {
        let mut factory = MessageFactory::new(renderer, &self.template_path, &self.css_path);

        if let Some(sender) = &self.sender {
            factory.set_default_sender(sender, self.sender_name.as_deref())?;
        }

        if let Some(reply_to) = &self.reply_to {
            factory.set_default_reply_to(reply_to, self.reply_to_name.as_deref())?;
        }

        if let Some(to) = &self.to {
            factory.set_default_to(to, self.to_name.as_deref())?;
        }

        Ok(factory)
    }
}
