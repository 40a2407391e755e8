use super::ContactBackend;
use crate::model::Contact;

/// Ordered, position-addressed contact collection with write-through persistence.
///
/// The collection is loaded once in [`ContactStore::new`]. After that every
/// successful mutation rewrites the whole collection through the backend.
/// Out-of-range positions are silent no-ops for `update`/`delete` and `None`
/// for `get_at`; nothing here returns an error.
///
/// No field validation happens at this level. Callers that need non-empty
/// names or phone numbers check them before calling in.
pub struct ContactStore<B: ContactBackend> {
    backend: B,
    contacts: Vec<Contact>,
}

impl<B: ContactBackend> ContactStore<B> {
    pub fn new(backend: B) -> Self {
        let contacts = backend.load();
        Self { backend, contacts }
    }

    pub fn add(&mut self, contact: Contact) {
        self.contacts.push(contact);
        self.persist();
    }

    pub fn update(&mut self, index: usize, contact: Contact) {
        if let Some(slot) = self.contacts.get_mut(index) {
            *slot = contact;
            self.persist();
        }
    }

    /// Removes the contact at `index`; later contacts shift down by one.
    pub fn delete(&mut self, index: usize) {
        if index < self.contacts.len() {
            self.contacts.remove(index);
            self.persist();
        }
    }

    pub fn get_all(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    pub fn get_at(&self, index: usize) -> Option<Contact> {
        self.contacts.get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn persist(&self) {
        self.backend.save(&self.contacts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::FileBackend;
    use crate::store::memory::fixtures::{ann, bo, cy, store_with_contacts};
    use crate::store::memory::MemBackend;
    use tempfile::TempDir;

    #[test]
    fn starts_empty_on_fresh_backend() {
        let store = ContactStore::new(MemBackend::new());
        assert!(store.is_empty());
        assert_eq!(store.get_all(), Vec::<Contact>::new());
    }

    #[test]
    fn starts_empty_on_corrupt_backend() {
        let backend = MemBackend::with_contacts(vec![ann()]);
        backend.set_corrupt(true);

        let store = ContactStore::new(backend);
        assert!(store.is_empty());
    }

    #[test]
    fn add_appends_and_saves() {
        let mut store = ContactStore::new(MemBackend::new());
        store.add(ann());

        assert_eq!(store.get_all(), vec![ann()]);
        assert_eq!(store.backend().persisted(), vec![ann()]);
        assert_eq!(store.backend().save_count(), 1);
    }

    #[test]
    fn add_accepts_blank_fields() {
        let mut store = ContactStore::new(MemBackend::new());
        store.add(Contact::new("", "", ""));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_shifts_later_contacts() {
        let mut store = ContactStore::new(MemBackend::new());
        store.add(ann());
        store.add(bo());
        store.add(cy());

        store.delete(0);

        assert_eq!(store.get_all(), vec![bo(), cy()]);
        assert_eq!(store.get_at(0), Some(bo()));
        assert_eq!(store.backend().persisted(), vec![bo(), cy()]);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = store_with_contacts(3);
        store.update(1, ann());

        assert_eq!(store.get_at(1), Some(ann()));
        assert_eq!(store.len(), 3);
        assert_eq!(store.backend().persisted()[1], ann());
    }

    #[test]
    fn out_of_range_is_a_silent_noop() {
        let mut store = store_with_contacts(2);
        let before = store.get_all();

        store.update(5, ann());
        store.delete(2);

        assert_eq!(store.get_all(), before);
        assert_eq!(store.get_at(5), None);
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn get_all_returns_a_detached_copy() {
        let mut store = ContactStore::new(MemBackend::new());
        store.add(ann());

        let mut copy = store.get_all();
        copy.push(bo());
        copy[0] = cy();

        assert_eq!(store.get_all(), vec![ann()]);
    }

    #[test]
    fn failed_save_keeps_memory_state() {
        let mut store = ContactStore::new(MemBackend::new());
        store.backend().set_simulate_write_error(true);

        store.add(ann());

        assert_eq!(store.get_all(), vec![ann()]);
        assert!(store.backend().persisted().is_empty());
    }

    #[test]
    fn next_successful_save_catches_disk_up() {
        let mut store = ContactStore::new(MemBackend::new());
        store.backend().set_simulate_write_error(true);
        store.add(ann());
        store.backend().set_simulate_write_error(false);
        store.add(bo());

        assert_eq!(store.backend().persisted(), vec![ann(), bo()]);
    }

    #[test]
    fn end_to_end_scenario_survives_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.json");

        let mut store = ContactStore::new(FileBackend::new(&path));
        store.add(Contact::new("Ann", "555-1000", ""));
        store.add(Contact::new("Bo", "555-2000", "bo@x.com"));
        store.update(0, Contact::new("Ann K.", "555-1000", ""));
        store.delete(1);

        let expected = vec![Contact::new("Ann K.", "555-1000", "")];
        assert_eq!(store.get_all(), expected);

        let reloaded = ContactStore::new(FileBackend::new(&path));
        assert_eq!(reloaded.get_all(), expected);
    }
}
