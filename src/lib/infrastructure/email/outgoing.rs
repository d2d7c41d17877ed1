//! Conversion of messages into `lettre` messages ready for a transport

use lettre::{
    address::AddressError,
    message::{header::ContentType, Mailbox as LettreMailbox, MultiPart},
};

use crate::domain::communication::{
    email_addresses::Mailbox, errors::MessageError, Body, Message,
};

fn mailbox(mailbox: &Mailbox) -> Result<LettreMailbox, AddressError> {
    Ok(LettreMailbox::new(
        mailbox.name.clone(),
        mailbox.email.as_str().parse()?,
    ))
}

/// Builds the wire message.
///
/// Plain text bodies become a single `text/plain` part, HTML bodies a
/// `multipart/alternative` with the plain text alternative first. `lettre`
/// requires a sender and at least one recipient.
impl TryFrom<Message> for lettre::Message {
    type Error = MessageError;

    fn try_from(message: Message) -> Result<Self, Self::Error> {
        let mut builder = lettre::Message::builder();

        if let Some(from) = &message.from {
            builder = builder.from(mailbox(from)?);
        }

        if let Some(reply_to) = &message.reply_to {
            builder = builder.reply_to(mailbox(reply_to)?);
        }

        if let Some(to) = &message.to {
            builder = builder.to(mailbox(to)?);
        }

        if let Some(subject) = message.subject {
            builder = builder.subject(subject);
        }

        let email = match message.body {
            Body::Plain(text) => builder.header(ContentType::TEXT_PLAIN).body(text)?,
            Body::Html { html, alternative } => {
                builder.multipart(MultiPart::alternative_plain_html(alternative, html))?
            }
        };

        Ok(email)
    }
}
