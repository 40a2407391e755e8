use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::{ContactBackend, ContactStore};

use super::helpers::resolve_position;

pub fn run<B: ContactBackend>(
    store: &mut ContactStore<B>,
    index: DisplayIndex,
) -> Result<CmdResult> {
    let (position, removed) = resolve_position(store, index)?;
    store.delete(position);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact deleted ({}): {}",
        index,
        removed.summary()
    )));
    Ok(result.with_affected_contacts(vec![removed]))
}
