use crate::error::{ContactzError, Result};
use crate::index::{DisplayContact, DisplayIndex};
use crate::model::Contact;
use crate::store::{ContactBackend, ContactStore};

/// Maps a display index to its store position and current contact.
pub fn resolve_position<B: ContactBackend>(
    store: &ContactStore<B>,
    index: DisplayIndex,
) -> Result<(usize, Contact)> {
    index
        .position()
        .and_then(|position| store.get_at(position).map(|contact| (position, contact)))
        .ok_or_else(|| ContactzError::Api(format!("Index {} not found", index)))
}

pub fn resolve_index<B: ContactBackend>(
    store: &ContactStore<B>,
    index: DisplayIndex,
) -> Result<DisplayContact> {
    let (_, contact) = resolve_position(store, index)?;
    Ok(DisplayContact { contact, index })
}

pub fn contacts_by_indexes<B: ContactBackend>(
    store: &ContactStore<B>,
    indexes: &[DisplayIndex],
) -> Result<Vec<DisplayContact>> {
    indexes
        .iter()
        .map(|idx| resolve_index(store, *idx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::store_with_contacts;

    #[test]
    fn resolves_one_based_indexes() {
        let store = store_with_contacts(3);
        let dc = resolve_index(&store, DisplayIndex(1)).unwrap();
        assert_eq!(dc.contact.name, "Contact 1");
        assert_eq!(dc.index, DisplayIndex(1));
    }

    #[test]
    fn resolve_position_is_zero_based() {
        let store = store_with_contacts(3);
        let (position, contact) = resolve_position(&store, DisplayIndex(3)).unwrap();
        assert_eq!(position, 2);
        assert_eq!(contact.name, "Contact 3");
    }

    #[test]
    fn zero_and_past_end_are_errors() {
        let store = store_with_contacts(2);
        assert!(resolve_index(&store, DisplayIndex(0)).is_err());
        assert!(resolve_index(&store, DisplayIndex(3)).is_err());
    }

    #[test]
    fn one_bad_index_fails_the_batch() {
        let store = store_with_contacts(2);
        let result = contacts_by_indexes(&store, &[DisplayIndex(1), DisplayIndex(9)]);
        assert!(result.is_err());
    }
}
