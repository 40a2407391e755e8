//! # Storage Layer
//!
//! Two pieces live here:
//!
//! - [`ContactBackend`]: the persistence adapter. It reads and writes the
//!   *whole* contact collection at once; there is no per-record access.
//! - [`ContactStore`]: the in-memory ordered collection. Every mutation is
//!   followed by a full write-through to the backend.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage, a single JSON file
//!   - Path is configuration, not a constant (defaults to `contacts.json`)
//!   - Writes go through a temp file + rename
//!
//! - [`memory::MemBackend`]: in-memory storage for testing
//!   - Can simulate write failures and corrupt data
//!
//! ## Failure Policy
//!
//! Backends report failures through [`ContactBackend::try_load`] and
//! [`ContactBackend::try_save`]. The store only ever calls the provided
//! [`ContactBackend::load`] and [`ContactBackend::save`], which log the error
//! and carry on: a failed save leaves memory and disk diverged until the next
//! successful write, and an unreadable file is treated as an empty book.
//!
//! ## Storage Format
//!
//! For `FileBackend`:
//! ```text
//! contacts.json   # JSON array of {name, phone_number, email}
//! ```

use crate::error::Result;
use crate::model::Contact;
use log::{debug, error};

pub mod contact_store;
pub mod fs;
pub mod memory;

pub use contact_store::ContactStore;

/// Whole-collection persistence for contacts.
pub trait ContactBackend {
    /// Read the persisted collection.
    ///
    /// A backend with nothing persisted yet returns `Ok(vec![])`.
    /// Unreadable or unparseable data is an `Err`.
    fn try_load(&self) -> Result<Vec<Contact>>;

    /// Replace the persisted collection with `contacts`.
    fn try_save(&self, contacts: &[Contact]) -> Result<()>;

    /// Human readable location, used in log lines.
    fn describe(&self) -> String;

    /// Load, falling back to an empty collection on any error.
    fn load(&self) -> Vec<Contact> {
        match self.try_load() {
            Ok(contacts) => {
                debug!("loaded {} contacts from {}", contacts.len(), self.describe());
                contacts
            }
            Err(e) => {
                error!(
                    "failed to load contacts from {}, starting empty: {}",
                    self.describe(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Save, logging any error instead of returning it.
    fn save(&self, contacts: &[Contact]) {
        match self.try_save(contacts) {
            Ok(()) => debug!("saved {} contacts to {}", contacts.len(), self.describe()),
            Err(e) => error!("failed to save contacts to {}: {}", self.describe(), e),
        }
    }
}
