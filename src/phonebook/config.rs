use crate::error::{PhonebookError, Result};
use crate::store::fs::DEFAULT_STORAGE_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for the phonebook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Backing file, relative paths resolve against the working directory
    #[serde(default = "default_storage_file")]
    pub storage_file: PathBuf,

    /// Save on exit without asking
    #[serde(default)]
    pub autosave_on_exit: bool,
}

fn default_storage_file() -> PathBuf {
    PathBuf::from(DEFAULT_STORAGE_FILE)
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            storage_file: default_storage_file(),
            autosave_on_exit: false,
        }
    }
}

impl PhonebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PhonebookError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| PhonebookError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Command-line or environment choice of backing file wins over the file setting
    pub fn with_storage_override(mut self, storage_file: Option<PathBuf>) -> Self {
        if let Some(path) = storage_file {
            self.storage_file = path;
        }
        self
    }
}
