//! # Display Indexes
//!
//! The store addresses contacts by zero-based position. People don't count
//! from zero, so everything user facing uses a 1-based [`DisplayIndex`]
//! instead, and only the command layer converts between the two.
//!
//! Positions are not stable: deleting contact 2 turns contact 3 into contact
//! 2. A display index is only meaningful against the listing it came from.

use crate::error::{ContactzError, Result};
use crate::model::Contact;
use std::fmt;
use std::str::FromStr;

/// A user-facing, 1-based contact index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl DisplayIndex {
    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    /// The store position, or `None` for the never-valid index 0.
    pub fn position(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for DisplayIndex {
    type Err = ContactzError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<usize>()
            .map(DisplayIndex)
            .map_err(|_| ContactzError::Api(format!("Invalid index format: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayContact {
    pub contact: Contact,
    pub index: DisplayIndex,
}

/// Pairs each contact with its display index, keeping store order.
pub fn index_contacts(contacts: Vec<Contact>) -> Vec<DisplayContact> {
    contacts
        .into_iter()
        .enumerate()
        .map(|(position, contact)| DisplayContact {
            contact,
            index: DisplayIndex::from_position(position),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_indexes_are_one_based() {
        assert_eq!(DisplayIndex::from_position(0), DisplayIndex(1));
        assert_eq!(DisplayIndex(3).position(), Some(2));
    }

    #[test]
    fn display_honors_width() {
        assert_eq!(format!("{:>3}", DisplayIndex(7)), "  7");
        assert_eq!(DisplayIndex(12).to_string(), "12");
    }

    #[test]
    fn zero_has_no_position() {
        assert_eq!(DisplayIndex(0).position(), None);
    }

    #[test]
    fn parses_plain_numbers() {
        assert_eq!("2".parse::<DisplayIndex>().unwrap(), DisplayIndex(2));
        assert_eq!(" 7 ".parse::<DisplayIndex>().unwrap(), DisplayIndex(7));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!("abc".parse::<DisplayIndex>().is_err());
        assert!("-1".parse::<DisplayIndex>().is_err());
        assert!("".parse::<DisplayIndex>().is_err());
    }

    #[test]
    fn index_contacts_keeps_order() {
        let indexed = index_contacts(vec![
            Contact::new("A", "1", ""),
            Contact::new("B", "2", ""),
        ]);
        assert_eq!(indexed[0].index, DisplayIndex(1));
        assert_eq!(indexed[0].contact.name, "A");
        assert_eq!(indexed[1].index, DisplayIndex(2));
        assert_eq!(indexed[1].contact.name, "B");
    }
}
