use serde::{Deserialize, Serialize};

pub type ContactId = u64;

/// One person in the phonebook.
///
/// Serialized as a flat record, which is also the on-disk shape:
/// `{"id": 1, "name": "Ann", "phone": "123", "comment": null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Contact {
    pub fn new(id: ContactId, name: String, phone: String, comment: Option<String>) -> Self {
        Self {
            id,
            name,
            phone,
            comment: comment.filter(|c| !c.is_empty()),
        }
    }

    /// Applies an edit in place and hands the contact back for chaining.
    pub fn update(&mut self, update: ContactUpdate) -> &mut Self {
        if let FieldUpdate::Set(name) = update.name {
            if !name.is_empty() {
                self.name = name;
            }
        }
        if let FieldUpdate::Set(phone) = update.phone {
            if !phone.is_empty() {
                self.phone = phone;
            }
        }
        match update.comment {
            FieldUpdate::Keep => {}
            FieldUpdate::Clear => self.comment = None,
            FieldUpdate::Set(comment) => {
                if !comment.is_empty() {
                    self.comment = Some(comment);
                }
            }
        }
        self
    }

    /// Case-insensitive substring search over name, phone and comment.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [Some(&self.name), Some(&self.phone), self.comment.as_ref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// What to do with a single field during an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate {
    #[default]
    Keep,
    /// Only meaningful for optional fields; required fields ignore it.
    Clear,
    Set(String),
}

impl FieldUpdate {
    pub fn is_keep(&self) -> bool {
        match self {
            FieldUpdate::Keep => true,
            FieldUpdate::Set(value) => value.is_empty(),
            FieldUpdate::Clear => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub name: FieldUpdate,
    pub phone: FieldUpdate,
    pub comment: FieldUpdate,
}

impl ContactUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = FieldUpdate::Set(name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = FieldUpdate::Set(phone.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = FieldUpdate::Set(comment.into());
        self
    }

    pub fn clear_comment(mut self) -> Self {
        self.comment = FieldUpdate::Clear;
        self
    }

    /// True when applying this update cannot change any contact.
    pub fn is_noop(&self) -> bool {
        self.name.is_keep() && self.phone.is_keep() && self.comment.is_keep()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Contact {
        Contact::new(
            1,
            "John Smith".into(),
            "5551234".into(),
            Some("Met at PyCon".into()),
        )
    }

    #[test]
    fn empty_comment_is_stored_as_absent() {
        let contact = Contact::new(1, "Ann".into(), "123".into(), Some(String::new()));
        assert_eq!(contact.comment, None);
    }

    #[test]
    fn matches_is_case_insensitive() {
        let contact = john();
        assert!(contact.matches("JOHN"));
        assert!(contact.matches("john"));
        assert_eq!(contact.matches("JOHN"), contact.matches("john"));
    }

    #[test]
    fn matches_phone_and_comment() {
        let contact = john();
        assert!(contact.matches("555"));
        assert!(contact.matches("pycon"));
        assert!(!contact.matches("6660000"));
    }

    #[test]
    fn matches_skips_absent_comment() {
        let contact = Contact::new(2, "Ann".into(), "123".into(), None);
        assert!(!contact.matches("none"));
        assert!(contact.matches(""));
    }

    #[test]
    fn update_replaces_non_empty_values() {
        let mut contact = john();
        contact.update(
            ContactUpdate::new()
                .name("Jane Doe")
                .phone("777")
                .comment("Neighbour"),
        );
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.phone, "777");
        assert_eq!(contact.comment.as_deref(), Some("Neighbour"));
        assert_eq!(contact.id, 1);
    }

    #[test]
    fn update_with_empty_or_missing_values_is_a_noop() {
        let mut contact = john();
        let update = ContactUpdate::new().name("").phone("").comment("");
        assert!(update.is_noop());
        contact.update(update);
        contact.update(ContactUpdate::new());
        assert_eq!(contact, john());
    }

    #[test]
    fn clear_only_affects_comment() {
        let mut contact = john();
        contact.update(ContactUpdate {
            name: FieldUpdate::Clear,
            phone: FieldUpdate::Clear,
            comment: FieldUpdate::Clear,
        });
        assert_eq!(contact.name, "John Smith");
        assert_eq!(contact.phone, "5551234");
        assert_eq!(contact.comment, None);
    }

    #[test]
    fn record_shape_round_trips_through_json() {
        let json = r#"{"id":3,"name":"Bob","phone":"42"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.comment, None);

        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(value["comment"], serde_json::Value::Null);
        assert_eq!(value["id"], 3);
    }
}
