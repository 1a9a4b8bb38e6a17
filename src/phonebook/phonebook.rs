//! # Phonebook Model
//!
//! [`PhonebookModel`] owns the working copy of the phonebook: an ordered map
//! from id to [`Contact`], loaded once from a [`ContactStore`] and written back
//! only on [`PhonebookModel::save`]. Every other operation touches the cache
//! alone.
//!
//! ## Ids
//!
//! New contacts get one more than the largest id seen during this run, or `1`
//! for an empty phonebook. The largest id is remembered even after that
//! contact is deleted, so a deleted id is never handed out again. The file only
//! records live contacts, so the mark restarts from the largest stored id on
//! the next run.
//!
//! ## Clean and dirty
//!
//! The model is clean when the cache equals what is on disk and dirty
//! otherwise. [`PhonebookModel::has_unsaved_changes`] decides by re-reading the
//! store and comparing record by record on every call. That is linear in the
//! number of contacts, which is fine for a personal phonebook.

use crate::error::{PhonebookError, Result, ValidationError};
use crate::model::{Contact, ContactId, ContactUpdate};
use crate::store::ContactStore;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

pub struct PhonebookModel<S: ContactStore> {
    store: S,
    cache: BTreeMap<ContactId, Contact>,
    high_water: ContactId,
}

impl<S: ContactStore> PhonebookModel<S> {
    /// Loads the store into a fresh cache.
    ///
    /// Fails with `CorruptStorage` when the store cannot be parsed, holds
    /// duplicate or zero ids, or has a record with an empty name or phone.
    pub fn open(mut store: S) -> Result<Self> {
        let mut cache = BTreeMap::new();
        for contact in store.load()? {
            if contact.name.is_empty() || contact.phone.is_empty() {
                return Err(PhonebookError::CorruptStorage(format!(
                    "{}: contact with id {} is missing a name or phone",
                    store.location(),
                    contact.id
                )));
            }
            if contact.id == 0 {
                return Err(PhonebookError::CorruptStorage(format!(
                    "{}: contact '{}' has id 0",
                    store.location(),
                    contact.name
                )));
            }
            if let Some(previous) = cache.insert(contact.id, contact) {
                return Err(PhonebookError::CorruptStorage(format!(
                    "{}: duplicate contact id {}",
                    store.location(),
                    previous.id
                )));
            }
        }
        let high_water = cache.keys().next_back().copied().unwrap_or(0);
        debug!(count = cache.len(), location = %store.location(), "phonebook opened");
        Ok(Self {
            store,
            cache,
            high_water,
        })
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        comment: Option<&str>,
    ) -> Result<&Contact> {
        require("Name", name)?;
        require("Phone", phone)?;

        let id = self.next_id()?;
        self.high_water = id;
        let contact = Contact::new(
            id,
            name.to_string(),
            phone.to_string(),
            comment.map(str::to_string),
        );
        debug!(id, "contact added");
        Ok(&*self.cache.entry(id).or_insert(contact))
    }

    /// Contacts matching `query`, in id order. An empty query matches all.
    pub fn find_contacts(&self, query: &str) -> Vec<&Contact> {
        self.cache.values().filter(|c| c.matches(query)).collect()
    }

    pub fn get_contact(&self, id: ContactId) -> Result<&Contact> {
        self.cache
            .get(&id)
            .ok_or(PhonebookError::ContactNotFound(id))
    }

    pub fn edit_contact(&mut self, id: ContactId, update: ContactUpdate) -> Result<&Contact> {
        let contact = self
            .cache
            .get_mut(&id)
            .ok_or(PhonebookError::ContactNotFound(id))?;
        debug!(id, noop = update.is_noop(), "contact edited");
        Ok(&*contact.update(update))
    }

    /// Removes a contact. Deleting an unknown id is not an error.
    pub fn delete_contact(&mut self, id: ContactId) -> Option<Contact> {
        let removed = self.cache.remove(&id);
        debug!(id, removed = removed.is_some(), "contact deleted");
        removed
    }

    pub fn contacts(&self) -> impl Iterator<Item = &Contact> {
        self.cache.values()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Fails with `IdSpaceExhausted` once the largest id is `u64::MAX`.
    pub fn next_id(&self) -> Result<ContactId> {
        let max = self.cache.keys().next_back().copied().unwrap_or(0);
        let highest = max.max(self.high_water);
        highest
            .checked_add(1)
            .ok_or(PhonebookError::IdSpaceExhausted(highest))
    }

    /// Compares the cache against a fresh read of the store.
    pub fn has_unsaved_changes(&self) -> Result<bool> {
        let stored = self.store.snapshot()?;
        if stored.len() != self.cache.len() {
            return Ok(true);
        }
        let stored: HashMap<ContactId, Contact> =
            stored.into_iter().map(|c| (c.id, c)).collect();
        Ok(self
            .cache
            .iter()
            .any(|(id, contact)| stored.get(id) != Some(contact)))
    }

    /// Writes the whole cache. On failure the cache is left as it was, so
    /// the model stays dirty.
    pub fn save(&mut self) -> Result<()> {
        let contacts: Vec<Contact> = self.cache.values().cloned().collect();
        self.store.save(&contacts)
    }

    pub fn raw_storage(&self) -> Result<String> {
        self.store.read_raw()
    }

    pub fn location(&self) -> String {
        self.store.location()
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::RequiredField(field.to_string()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn empty_book() -> PhonebookModel<InMemoryStore> {
        PhonebookModel::open(InMemoryStore::new()).unwrap()
    }

    #[test]
    fn first_contact_gets_id_one_and_no_comment() {
        let mut book = empty_book();
        let ann = book.add_contact("Ann", "123", None).unwrap();
        assert_eq!(ann.id, 1);
        assert_eq!(ann.comment, None);
    }

    #[test]
    fn ids_increase_strictly_without_deletions() {
        let mut book = empty_book();
        let ids: Vec<_> = (0..5)
            .map(|i| book.add_contact(&format!("C{i}"), "1", None).unwrap().id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn next_id_follows_the_largest_id() {
        let store = StoreFixture::new()
            .with_contact(1, "A", "1")
            .with_contact(2, "B", "2")
            .with_contact(5, "C", "5")
            .build();
        let mut book = PhonebookModel::open(store).unwrap();
        assert_eq!(book.next_id().unwrap(), 6);
        assert_eq!(book.add_contact("D", "6", None).unwrap().id, 6);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut book = empty_book();
        book.add_contact("A", "1", None).unwrap();
        book.add_contact("B", "2", None).unwrap();
        book.add_contact("C", "3", None).unwrap();

        book.delete_contact(2);
        assert_eq!(book.add_contact("D", "4", None).unwrap().id, 4);
        assert!(book.get_contact(2).is_err());
    }

    #[test]
    fn deleting_the_newest_contact_does_not_free_its_id() {
        let mut book = empty_book();
        book.add_contact("A", "1", None).unwrap();
        book.add_contact("B", "2", None).unwrap();
        book.delete_contact(2);
        assert_eq!(book.add_contact("C", "3", None).unwrap().id, 3);
    }

    #[test]
    fn high_water_mark_starts_from_the_stored_maximum() {
        let store = StoreFixture::new().with_contact(7, "A", "1").build();
        let mut book = PhonebookModel::open(store).unwrap();
        book.delete_contact(7);
        assert!(book.is_empty());
        assert_eq!(book.next_id().unwrap(), 8);
    }

    #[test]
    fn add_rejects_missing_required_fields() {
        let mut book = empty_book();
        let err = book.add_contact("", "123", None).unwrap_err();
        assert!(matches!(
            err,
            PhonebookError::Validation(ValidationError::RequiredField(ref f)) if f == "Name"
        ));
        let err = book.add_contact("Ann", "", None).unwrap_err();
        assert!(matches!(
            err,
            PhonebookError::Validation(ValidationError::RequiredField(ref f)) if f == "Phone"
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn get_missing_contact_fails_with_its_id() {
        let book = empty_book();
        assert!(matches!(
            book.get_contact(99),
            Err(PhonebookError::ContactNotFound(99))
        ));
    }

    #[test]
    fn find_by_phone_substring() {
        let store = StoreFixture::new()
            .with_contact(1, "Ann", "5551234")
            .with_contact(2, "Bob", "6660000")
            .build();
        let book = PhonebookModel::open(store).unwrap();
        let found = book.find_contacts("55");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn empty_query_matches_everything() {
        let store = StoreFixture::new().with_contacts(3).build();
        let book = PhonebookModel::open(store).unwrap();
        assert_eq!(book.find_contacts("").len(), 3);
    }

    #[test]
    fn delete_of_unknown_id_is_a_noop() {
        let mut book = empty_book();
        book.add_contact("Ann", "123", None).unwrap();
        assert!(book.delete_contact(1000).is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn edit_missing_contact_fails() {
        let mut book = empty_book();
        let err = book
            .edit_contact(3, ContactUpdate::new().name("X"))
            .unwrap_err();
        assert!(matches!(err, PhonebookError::ContactNotFound(3)));
    }

    #[test]
    fn clean_after_open_and_after_save() {
        let store = StoreFixture::new().with_contacts(2).build();
        let mut book = PhonebookModel::open(store).unwrap();
        assert!(!book.has_unsaved_changes().unwrap());

        book.add_contact("New", "1", None).unwrap();
        book.save().unwrap();
        assert!(!book.has_unsaved_changes().unwrap());
    }

    #[test]
    fn every_mutation_makes_the_model_dirty() {
        let store = StoreFixture::new()
            .with_commented_contact(1, "Ann", "123", "friend")
            .build();

        let mut book = PhonebookModel::open(store).unwrap();
        book.add_contact("Bob", "456", None).unwrap();
        assert!(book.has_unsaved_changes().unwrap());
        book.save().unwrap();

        book.delete_contact(2);
        assert!(book.has_unsaved_changes().unwrap());
        book.save().unwrap();

        book.edit_contact(1, ContactUpdate::new().phone("999"))
            .unwrap();
        assert!(book.has_unsaved_changes().unwrap());
        book.save().unwrap();

        book.edit_contact(1, ContactUpdate::new().clear_comment())
            .unwrap();
        assert!(book.has_unsaved_changes().unwrap());
    }

    #[test]
    fn noop_edit_keeps_the_model_clean() {
        let store = StoreFixture::new().with_contact(1, "Ann", "123").build();
        let mut book = PhonebookModel::open(store).unwrap();
        book.edit_contact(1, ContactUpdate::new().name("")).unwrap();
        assert!(!book.has_unsaved_changes().unwrap());
    }

    #[test]
    fn same_ids_with_different_fields_are_dirty() {
        let store = StoreFixture::new().with_contact(1, "Ann", "123").build();
        let mut book = PhonebookModel::open(store).unwrap();
        book.delete_contact(1);
        book.add_contact("Bob", "456", None).unwrap();
        assert_eq!(book.get_contact(1).unwrap().name, "Bob");
        assert!(book.has_unsaved_changes().unwrap());
    }

    #[test]
    fn failed_save_leaves_the_model_dirty() {
        let store = StoreFixture::new()
            .with_contact(1, "Ann", "123")
            .build()
            .failing_saves();
        let mut book = PhonebookModel::open(store).unwrap();
        book.add_contact("Bob", "456", None).unwrap();

        assert!(book.save().is_err());
        assert_eq!(book.len(), 2);
        assert!(book.has_unsaved_changes().unwrap());
    }

    #[test]
    fn save_then_reopen_reproduces_the_cache() {
        let mut book = empty_book();
        book.add_contact("Ann", "123", Some("friend")).unwrap();
        book.add_contact("Bob", "456", None).unwrap();
        book.save().unwrap();

        let raw = book.raw_storage().unwrap();
        let reopened = PhonebookModel::open(InMemoryStore::with_raw(raw)).unwrap();
        let before: Vec<_> = book.contacts().cloned().collect();
        let after: Vec<_> = reopened.contacts().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn duplicate_ids_are_corrupt_storage() {
        let store = StoreFixture::new()
            .with_contact(1, "Ann", "123")
            .with_contact(1, "Bob", "456")
            .build();
        assert!(matches!(
            PhonebookModel::open(store),
            Err(PhonebookError::CorruptStorage(_))
        ));
    }

    #[test]
    fn adding_past_the_largest_id_fails_without_changes() {
        let store = InMemoryStore::with_raw(format!(
            r#"[{{"id":{},"name":"Ann","phone":"1"}}]"#,
            u64::MAX
        ));
        let mut book = PhonebookModel::open(store).unwrap();

        let err = book.add_contact("Bob", "2", None).unwrap_err();
        assert!(matches!(err, PhonebookError::IdSpaceExhausted(u64::MAX)));
        assert_eq!(book.len(), 1);
        assert!(!book.has_unsaved_changes().unwrap());
    }

    #[test]
    fn the_last_free_id_can_still_be_used() {
        let store = InMemoryStore::with_raw(format!(
            r#"[{{"id":{},"name":"Ann","phone":"1"}}]"#,
            u64::MAX - 1
        ));
        let mut book = PhonebookModel::open(store).unwrap();

        assert_eq!(book.add_contact("Bob", "2", None).unwrap().id, u64::MAX);
        assert!(book.add_contact("Carl", "3", None).is_err());
    }

    #[test]
    fn empty_required_fields_are_corrupt_storage() {
        for raw in [
            r#"[{"id":1,"name":"","phone":"1"}]"#,
            r#"[{"id":1,"name":"Ann","phone":""}]"#,
            r#"[{"id":1,"name":"","phone":""}]"#,
        ] {
            assert!(matches!(
                PhonebookModel::open(InMemoryStore::with_raw(raw)),
                Err(PhonebookError::CorruptStorage(_))
            ));
        }
    }

    #[test]
    fn zero_id_is_corrupt_storage() {
        let store = InMemoryStore::with_raw(r#"[{"id":0,"name":"Ann","phone":"1"}]"#);
        assert!(matches!(
            PhonebookModel::open(store),
            Err(PhonebookError::CorruptStorage(_))
        ));
    }
}
