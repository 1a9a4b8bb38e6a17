use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContactId;
use crate::phonebook::PhonebookModel;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(book: &mut PhonebookModel<S>, id: ContactId) -> Result<CmdResult> {
    let result = match book.delete_contact(id) {
        Some(contact) => CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Contact deleted (ID={}): {}",
                contact.id, contact.name
            )))
            .with_affected_contacts(vec![contact]),
        None => CmdResult::default().with_message(CmdMessage::info(format!(
            "No contact with ID={}, nothing deleted",
            id
        ))),
    };
    Ok(result)
}
