//! # API Facade
//!
//! The single entry point a UI uses to drive a phonebook. It owns the
//! [`PhonebookModel`] for the whole session and dispatches each call to the
//! matching module under `commands/`.
//!
//! The facade does no formatting and no terminal I/O. It returns
//! [`CmdResult`] values and leaves presentation to the caller.
//!
//! `PhonebookApi<S: ContactStore>` is generic over the storage backend:
//! `JsonFileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::{Contact, ContactId, ContactUpdate};
use crate::phonebook::PhonebookModel;
use crate::store::ContactStore;

pub struct PhonebookApi<S: ContactStore> {
    book: PhonebookModel<S>,
}

impl<S: ContactStore> PhonebookApi<S> {
    /// Loads the store. A corrupt store is an error here, before any command runs.
    pub fn open(store: S) -> Result<Self> {
        Ok(Self {
            book: PhonebookModel::open(store)?,
        })
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        comment: Option<&str>,
    ) -> Result<CmdResult> {
        commands::add::run(&mut self.book, name, phone, comment)
    }

    pub fn find_contacts(&self, query: &str) -> Result<CmdResult> {
        commands::find::run(&self.book, query)
    }

    pub fn list_contacts(&self) -> Result<CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn get_contact(&self, id: ContactId) -> Result<&Contact> {
        self.book.get_contact(id)
    }

    pub fn edit_contact(&mut self, id: ContactId, update: ContactUpdate) -> Result<CmdResult> {
        commands::edit::run(&mut self.book, id, update)
    }

    pub fn delete_contact(&mut self, id: ContactId) -> Result<CmdResult> {
        commands::delete::run(&mut self.book, id)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        commands::save::run(&mut self.book)
    }

    pub fn show_storage(&self) -> Result<CmdResult> {
        commands::storage::run(&self.book)
    }

    pub fn has_unsaved_changes(&self) -> Result<bool> {
        self.book.has_unsaved_changes()
    }

    pub fn book(&self) -> &PhonebookModel<S> {
        &self.book
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
