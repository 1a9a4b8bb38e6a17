//! # Storage Layer
//!
//! Storage is a stateless codec between the backing file and a list of
//! [`Contact`] records. It never holds the working copy of the phonebook; that
//! cache belongs to [`crate::phonebook::PhonebookModel`], which calls into the
//! store at startup, on save, and when checking for unsaved changes.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: Production storage in a single JSON file
//! - [`memory::InMemoryStore`]: Same JSON codec, text kept in memory (testing)
//!
//! ## Storage Format
//!
//! The whole phonebook is one JSON array, rewritten on every save:
//!
//! ```text
//! [
//!   { "id": 1, "name": "Ann", "phone": "123", "comment": null },
//!   { "id": 2, "name": "Bob", "phone": "456", "comment": "work" }
//! ]
//! ```
//!
//! There is no locking. Two processes saving the same file will silently
//! overwrite each other.

use crate::error::{PhonebookError, Result};
use crate::model::Contact;

pub mod fs;
pub mod memory;

/// Abstract interface for the backing store of a phonebook.
pub trait ContactStore {
    /// Read every record, creating an empty store if none exists yet.
    fn load(&mut self) -> Result<Vec<Contact>>;

    /// Read the current persisted records without creating anything.
    /// A store that does not exist yet reads as empty.
    fn snapshot(&self) -> Result<Vec<Contact>>;

    /// Replace the persisted records with `contacts`.
    fn save(&mut self, contacts: &[Contact]) -> Result<()>;

    /// The persisted text, exactly as stored.
    fn read_raw(&self) -> Result<String>;

    /// Where the data lives, for messages.
    fn location(&self) -> String;
}

pub(crate) fn decode(source: &str, raw: &str) -> Result<Vec<Contact>> {
    serde_json::from_str(raw)
        .map_err(|e| PhonebookError::CorruptStorage(format!("{}: {}", source, e)))
}

pub(crate) fn encode(contacts: &[Contact]) -> Result<String> {
    let mut text = serde_json::to_string_pretty(contacts)?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_the_wrong_shape() {
        let err = decode("test", r#"{"1": {"name": "Ann", "phone": "1"}}"#).unwrap_err();
        assert!(matches!(err, PhonebookError::CorruptStorage(_)));

        let err = decode("test", "not json").unwrap_err();
        assert!(err.to_string().contains("test"));
    }

    #[test]
    fn encode_then_decode_keeps_records() {
        let contacts = vec![
            Contact::new(1, "Ann".into(), "123".into(), None),
            Contact::new(2, "Bob".into(), "456".into(), Some("work".into())),
        ];
        let text = encode(&contacts).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(decode("test", &text).unwrap(), contacts);
    }
}
