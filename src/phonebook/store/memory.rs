use super::{decode, encode, ContactStore};
use crate::error::Result;
use crate::model::Contact;

/// In-memory storage for testing and development.
///
/// Keeps the serialized text rather than the records, so loads and snapshots
/// go through the same JSON codec as the file store. `None` stands for a store
/// that has never been created.
#[derive(Default)]
pub struct InMemoryStore {
    raw: Option<String>,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose persisted text is `raw`, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            fail_saves: false,
        }
    }

    pub fn with_contacts(contacts: &[Contact]) -> Result<Self> {
        Ok(Self::with_raw(encode(contacts)?))
    }

    /// Makes every subsequent save fail with an I/O error.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }
}

impl ContactStore for InMemoryStore {
    fn load(&mut self) -> Result<Vec<Contact>> {
        if self.raw.is_none() {
            self.raw = Some(encode(&[])?);
        }
        self.snapshot()
    }

    fn snapshot(&self) -> Result<Vec<Contact>> {
        match &self.raw {
            Some(raw) => decode(&self.location(), raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        if self.fail_saves {
            return Err(std::io::Error::other("simulated write failure").into());
        }
        self.raw = Some(encode(contacts)?);
        Ok(())
    }

    fn read_raw(&self) -> Result<String> {
        Ok(self.raw.clone().unwrap_or_default())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        contacts: Vec<Contact>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                contacts: Vec::new(),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = self.contacts.len() as u64 + 1;
                self.contacts.push(Contact::new(
                    id,
                    format!("Test Contact {}", i + 1),
                    format!("555000{}", i + 1),
                    None,
                ));
            }
            self
        }

        pub fn with_contact(mut self, id: u64, name: &str, phone: &str) -> Self {
            self.contacts
                .push(Contact::new(id, name.into(), phone.into(), None));
            self
        }

        pub fn with_commented_contact(
            mut self,
            id: u64,
            name: &str,
            phone: &str,
            comment: &str,
        ) -> Self {
            self.contacts.push(Contact::new(
                id,
                name.into(),
                phone.into(),
                Some(comment.into()),
            ));
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_contacts(&self.contacts).unwrap()
        }
    }
}
