use crate::commands::{CmdMessage, CmdResult, ContactInput};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::{ContactBackend, ContactStore};

pub fn run<B: ContactBackend>(
    store: &mut ContactStore<B>,
    input: ContactInput,
) -> Result<CmdResult> {
    let contact = input.into_contact()?;
    let duplicate = store
        .get_all()
        .iter()
        .any(|c| c.name == contact.name && c.phone_number == contact.phone_number);
    store.add(contact.clone());

    let index = DisplayIndex(store.len());
    let mut result = CmdResult::default();
    if duplicate {
        result.add_message(CmdMessage::warning(format!(
            "A contact named {} with number {} already exists",
            contact.name, contact.phone_number
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Contact added ({}): {}",
        index,
        contact.summary()
    )));
    Ok(result.with_affected_contacts(vec![contact]))
}
