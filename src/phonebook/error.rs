use crate::model::ContactId;
use thiserror::Error;

/// Problems with user-supplied values. The offending command is abandoned,
/// nothing in the phonebook changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    RequiredField(String),

    #[error("incorrect value '{0}' for contact ID, it must be a positive integer")]
    NonIntegerId(String),
}

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("Contact with ID={0} not found")]
    ContactNotFound(ContactId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage is corrupt: {0}")]
    CorruptStorage(String),

    #[error("no contact IDs left after ID={0}")]
    IdSpaceExhausted(ContactId),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),
}

impl PhonebookError {
    /// Errors the command loop cannot recover from by reporting and moving on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, PhonebookError::Terminal(_))
    }
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
