//! # Command Layer
//!
//! One module per user-facing operation. Commands take a [`ContactStore`]
//! plus plain Rust arguments and return a [`CmdResult`]; they never print.
//!
//! This is also where the presentation-layer rules live: display indexes are
//! resolved to store positions here, and blank names or phone numbers are
//! rejected here. The store underneath accepts anything.
//!
//! [`ContactStore`]: crate::store::ContactStore

use crate::config::ContactzConfig;
use crate::error::{ContactzError, Result};
use crate::index::DisplayContact;
use crate::model::Contact;

pub mod add;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<Contact>,
    pub listed_contacts: Vec<DisplayContact>,
    pub config: Option<ContactzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<DisplayContact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_config(mut self, config: ContactzConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub phone_number: String,
    pub email: String,
}

impl ContactInput {
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }

    /// Trims every field and builds a contact, rejecting a blank name or phone number.
    pub fn into_contact(self) -> Result<Contact> {
        let name = self.name.trim();
        let phone_number = self.phone_number.trim();
        let email = self.email.trim();

        if name.is_empty() || phone_number.is_empty() {
            return Err(ContactzError::Api(
                "Name and Phone Number are required!".to_string(),
            ));
        }

        Ok(Contact::new(name, phone_number, email))
    }
}

impl From<Contact> for ContactInput {
    fn from(contact: Contact) -> Self {
        Self {
            name: contact.name,
            phone_number: contact.phone_number,
            email: contact.email,
        }
    }
}
