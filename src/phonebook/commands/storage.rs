use crate::commands::CmdResult;
use crate::error::Result;
use crate::phonebook::PhonebookModel;
use crate::store::ContactStore;

/// The persisted text, bypassing the cache.
pub fn run<S: ContactStore>(book: &PhonebookModel<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_raw_storage(book.raw_storage()?))
}
