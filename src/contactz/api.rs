//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every contactz operation, whatever UI sits on top.
//!
//! The facade:
//! - **Parses** user-supplied index strings into [`DisplayIndex`] values
//! - **Dispatches** to the matching command function
//! - **Returns** structured `Result<CmdResult>` values
//!
//! It does no business logic (that lives in `commands/*.rs`) and no
//! terminal I/O.
//!
//! `ContactzApi<B: ContactBackend>` is generic over the persistence backend:
//! `FileBackend` in production, `MemBackend` in tests.

use crate::commands::{self, CmdResult, ContactInput};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::{ContactBackend, ContactStore};
use std::path::PathBuf;
use std::str::FromStr;

pub struct ContactzApi<B: ContactBackend> {
    store: ContactStore<B>,
    config_dir: PathBuf,
}

impl<B: ContactBackend> ContactzApi<B> {
    pub fn new(store: ContactStore<B>, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn list_contacts(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add_contact(&mut self, input: ContactInput) -> Result<CmdResult> {
        commands::add::run(&mut self.store, input)
    }

    pub fn update_contact(&mut self, index: &str, input: ContactInput) -> Result<CmdResult> {
        let index = DisplayIndex::from_str(index)?;
        commands::update::run(&mut self.store, index, input)
    }

    /// Update only the given fields, keeping the rest of the current record.
    pub fn update_fields(
        &mut self,
        index: &str,
        name: Option<String>,
        phone_number: Option<String>,
        email: Option<String>,
    ) -> Result<CmdResult> {
        let index = DisplayIndex::from_str(index)?;
        let current = commands::helpers::resolve_index(&self.store, index)?;

        let mut input = ContactInput::from(current.contact);
        if let Some(name) = name {
            input.name = name;
        }
        if let Some(phone_number) = phone_number {
            input.phone_number = phone_number;
        }
        if let Some(email) = email {
            input.email = email;
        }

        commands::update::run(&mut self.store, index, input)
    }

    pub fn delete_contact(&mut self, index: &str) -> Result<CmdResult> {
        let index = DisplayIndex::from_str(index)?;
        commands::delete::run(&mut self.store, index)
    }

    pub fn view_contacts<I: AsRef<str>>(&self, indexes: &[I]) -> Result<CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::view::run(&self.store, &indexes)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn store(&self) -> &ContactStore<B> {
        &self.store
    }
}

fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>> {
    inputs
        .iter()
        .map(|s| DisplayIndex::from_str(s.as_ref()))
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, MessageLevel};
