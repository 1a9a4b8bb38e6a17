use super::{decode, encode, ContactStore};
use crate::error::{PhonebookError, Result};
use crate::model::Contact;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const DEFAULT_STORAGE_FILE: &str = "phonebook.json";

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PhonebookError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Writes to a sibling temp file, then renames over the target.
    fn write_atomic(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir()?;
        let tmp = self.tmp_path();
        if let Err(e) = fs::write(&tmp, content) {
            let _ = fs::remove_file(&tmp);
            return Err(PhonebookError::Io(e));
        }
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            PhonebookError::Io(e)
        })
    }
}

impl ContactStore for JsonFileStore {
    fn load(&mut self) -> Result<Vec<Contact>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "storage file missing, creating it");
            self.write_atomic(&encode(&[])?)?;
            return Ok(Vec::new());
        }
        let contacts = self.snapshot()?;
        debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn snapshot(&self) -> Result<Vec<Contact>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode(&self.location(), &raw),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "storage file disappeared, reading it as empty");
                Ok(Vec::new())
            }
            Err(e) => Err(PhonebookError::Io(e)),
        }
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.write_atomic(&encode(contacts)?)?;
        debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }

    fn read_raw(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(PhonebookError::Io)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
