use crate::commands::CmdResult;
use crate::error::Result;
use crate::phonebook::PhonebookModel;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(book: &PhonebookModel<S>) -> Result<CmdResult> {
    let listed = book.contacts().cloned().collect();
    Ok(CmdResult::default().with_listed_contacts(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_every_contact() {
        let store = StoreFixture::new()
            .with_contact(4, "D", "4")
            .with_contact(2, "B", "2")
            .build();
        let book = PhonebookModel::open(store).unwrap();

        let result = run(&book).unwrap();
        let ids: Vec<_> = result.listed_contacts.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }
}
