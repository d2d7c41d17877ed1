//! Mailbox: an address with an optional display name

use std::{collections::BTreeMap, fmt};

use super::{EmailAddress, EmailAddressError};

/// An email address, optionally paired with the name of its owner
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mailbox {
    /// The address
    pub email: EmailAddress,

    /// The display name, if any
    pub name: Option<String>,
}

impl Mailbox {
    /// Creates a mailbox from a raw address and an optional name.
    ///
    /// Blank names are treated as absent.
    pub fn new(email: &str, name: Option<&str>) -> Result<Self, EmailAddressError> {
        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from);

        Ok(Self {
            email: EmailAddress::new(email)?,
            name,
        })
    }

    /// The mailbox as an address-to-name mapping
    pub fn to_map(&self) -> BTreeMap<String, Option<String>> {
        BTreeMap::from([(self.email.to_string(), self.name.clone())])
    }
}

impl From<EmailAddress> for Mailbox {
    fn from(email: EmailAddress) -> Self {
        Self { email, name: None }
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} <{}>", self.email),
            None => write!(f, "{}", self.email),
        }
    }
}
