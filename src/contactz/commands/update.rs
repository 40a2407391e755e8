use crate::commands::{CmdMessage, CmdResult, ContactInput};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::{ContactBackend, ContactStore};

use super::helpers::resolve_position;

pub fn run<B: ContactBackend>(
    store: &mut ContactStore<B>,
    index: DisplayIndex,
    input: ContactInput,
) -> Result<CmdResult> {
    let (position, _) = resolve_position(store, index)?;
    let contact = input.into_contact()?;
    store.update(position, contact.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact updated ({}): {}",
        index,
        contact.summary()
    )));
    Ok(result.with_affected_contacts(vec![contact]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Contact;
    use crate::store::memory::fixtures::store_with_contacts;

    #[test]
    fn replaces_the_whole_record() {
        let mut store = store_with_contacts(2);
        run(
            &mut store,
            DisplayIndex(2),
            ContactInput::new("Bo", "555-2000", ""),
        )
        .unwrap();

        assert_eq!(store.get_at(1), Some(Contact::new("Bo", "555-2000", "")));
        assert_eq!(store.backend().persisted()[1].name, "Bo");
    }

    #[test]
    fn unknown_index_is_an_error() {
        let mut store = store_with_contacts(2);
        let before = store.get_all();

        let result = run(
            &mut store,
            DisplayIndex(5),
            ContactInput::new("X", "1", ""),
        );

        assert!(result.is_err());
        assert_eq!(store.get_all(), before);
    }

    #[test]
    fn blank_input_leaves_contact_alone() {
        let mut store = store_with_contacts(1);
        let before = store.get_all();

        assert!(run(&mut store, DisplayIndex(1), ContactInput::new("", "", "")).is_err());
        assert_eq!(store.get_all(), before);
    }
}
