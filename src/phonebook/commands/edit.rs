use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ContactId, ContactUpdate};
use crate::phonebook::PhonebookModel;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(
    book: &mut PhonebookModel<S>,
    id: ContactId,
    update: ContactUpdate,
) -> Result<CmdResult> {
    let noop = update.is_noop();
    let contact = book.edit_contact(id, update)?.clone();

    let message = if noop {
        CmdMessage::info(format!("Contact unchanged (ID={})", contact.id))
    } else {
        CmdMessage::success(format!(
            "Contact updated (ID={}): {}",
            contact.id, contact.name
        ))
    };
    Ok(CmdResult::default()
        .with_message(message)
        .with_affected_contacts(vec![contact]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::PhonebookError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_fields_in_place() {
        let store = StoreFixture::new()
            .with_commented_contact(1, "Ann", "123", "old")
            .build();
        let mut book = PhonebookModel::open(store).unwrap();

        let result = run(
            &mut book,
            1,
            ContactUpdate::new().phone("999").clear_comment(),
        )
        .unwrap();

        let updated = &result.affected_contacts[0];
        assert_eq!(updated.phone, "999");
        assert_eq!(updated.comment, None);
        assert_eq!(book.get_contact(1).unwrap(), updated);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn empty_update_is_reported_as_unchanged() {
        let store = StoreFixture::new().with_contact(1, "Ann", "123").build();
        let mut book = PhonebookModel::open(store).unwrap();

        let result = run(&mut book, 1, ContactUpdate::new()).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = StoreFixture::new().with_contact(1, "Ann", "123").build();
        let mut book = PhonebookModel::open(store).unwrap();

        let err = run(&mut book, 2, ContactUpdate::new().name("X")).unwrap_err();
        assert!(matches!(err, PhonebookError::ContactNotFound(2)));
    }
}
