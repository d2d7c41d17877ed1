//! Email construction

pub mod email_addresses;
pub mod errors;
pub mod message;
pub mod message_factory;
pub mod plain_text;
pub mod templates;

pub use message::{Body, Message};
pub use message_factory::MessageFactory;
