use super::ContactBackend;
use crate::error::{ContactzError, Result};
use crate::model::Contact;
use std::cell::{Cell, RefCell};

/// In-memory backend for testing.
///
/// Uses `RefCell` since contactz is single-threaded, which lets the
/// `ContactBackend` trait keep `&self` receivers.
#[derive(Default)]
pub struct MemBackend {
    contacts: RefCell<Vec<Contact>>,
    corrupt: Cell<bool>,
    simulate_write_error: Cell<bool>,
    save_count: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that already holds `contacts`, as if saved by a previous run.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let backend = Self::new();
        *backend.contacts.borrow_mut() = contacts;
        backend
    }

    /// Make the next loads fail as if the persisted data were unreadable.
    pub fn set_corrupt(&self, corrupt: bool) {
        self.corrupt.set(corrupt);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// What a fresh load would see, bypassing the corrupt flag.
    pub fn persisted(&self) -> Vec<Contact> {
        self.contacts.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl ContactBackend for MemBackend {
    fn try_load(&self) -> Result<Vec<Contact>> {
        if self.corrupt.get() {
            return Err(ContactzError::Store("Simulated corrupt data".to_string()));
        }
        Ok(self.contacts.borrow().clone())
    }

    fn try_save(&self, contacts: &[Contact]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ContactzError::Store("Simulated write error".to_string()));
        }
        *self.contacts.borrow_mut() = contacts.to_vec();
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory://contacts".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::ContactStore;

    /// A store over a fresh `MemBackend` seeded with `count` generated contacts.
    pub fn store_with_contacts(count: usize) -> ContactStore<MemBackend> {
        let contacts = (1..=count)
            .map(|i| {
                Contact::new(
                    format!("Contact {}", i),
                    format!("555-{:04}", i),
                    format!("contact{}@example.com", i),
                )
            })
            .collect();
        ContactStore::new(MemBackend::with_contacts(contacts))
    }

    pub fn ann() -> Contact {
        Contact::new("Ann", "555-1000", "")
    }

    pub fn bo() -> Contact {
        Contact::new("Bo", "555-2000", "bo@x.com")
    }

    pub fn cy() -> Contact {
        Contact::new("Cy", "555-3000", "cy@x.com")
    }
}
