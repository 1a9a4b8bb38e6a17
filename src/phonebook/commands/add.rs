use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::phonebook::PhonebookModel;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(
    book: &mut PhonebookModel<S>,
    name: &str,
    phone: &str,
    comment: Option<&str>,
) -> Result<CmdResult> {
    let contact = book.add_contact(name, phone, comment)?.clone();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Contact added (ID={}): {}",
            contact.id, contact.name
        )))
        .with_affected_contacts(vec![contact]))
}
