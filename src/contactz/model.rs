use serde::{Deserialize, Serialize};
use std::fmt;

/// A single address book entry.
///
/// Contacts carry no identity of their own: the store addresses them by
/// position. Editing a contact means constructing a new one and replacing
/// the old value at that position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
}

impl Contact {
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

    /// One-line form used by list views: `name - phone`.
    pub fn summary(&self) -> String {
        format!("{} - {}", self.name, self.phone_number)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Email: {}",
            self.name, self.phone_number, self.email
        )
    }
}
