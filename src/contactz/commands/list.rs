use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_contacts;
use crate::store::{ContactBackend, ContactStore};

pub fn run<B: ContactBackend>(store: &ContactStore<B>) -> Result<CmdResult> {
    let listed = index_contacts(store.get_all());
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No contacts found."));
    }
    Ok(result.with_listed_contacts(listed))
}
