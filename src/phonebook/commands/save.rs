use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::phonebook::PhonebookModel;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(book: &mut PhonebookModel<S>) -> Result<CmdResult> {
    book.save()?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Saved {} contact(s) to {}",
        book.len(),
        book.location()
    ))))
}
