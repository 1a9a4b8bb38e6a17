use crate::commands::CmdResult;
use crate::error::Result;
use crate::phonebook::PhonebookModel;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(book: &PhonebookModel<S>, query: &str) -> Result<CmdResult> {
    let found = book.find_contacts(query).into_iter().cloned().collect();
    Ok(CmdResult::default().with_listed_contacts(found))
}
