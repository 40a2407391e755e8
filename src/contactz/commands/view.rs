use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::{ContactBackend, ContactStore};

use super::helpers::contacts_by_indexes;

pub fn run<B: ContactBackend>(
    store: &ContactStore<B>,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    let contacts = contacts_by_indexes(store, indexes)?;
    Ok(CmdResult::default().with_listed_contacts(contacts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::store_with_contacts;

    #[test]
    fn views_requested_contacts_in_request_order() {
        let store = store_with_contacts(3);
        let result = run(&store, &[DisplayIndex(3), DisplayIndex(1)]).unwrap();

        assert_eq!(result.listed_contacts.len(), 2);
        assert_eq!(result.listed_contacts[0].contact.name, "Contact 3");
        assert_eq!(result.listed_contacts[1].index, DisplayIndex(1));
    }
}
