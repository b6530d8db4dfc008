//! Persisted user preferences behind a small key-value interface.
//!
//! Nothing in the document model depends on this module. The front end reads `last_dir` at start
//! and records it after every open and save.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key holding the last project directory used.
pub const LAST_DIR: &str = "last_dir";

/// String preferences that can be persisted.
pub trait PreferenceStore {
    /// Value stored under `key`.
    fn get(&self, key: &str) -> Option<&str>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Persists the current values.
    ///
    /// # Errors
    ///
    /// Returns an error if the values cannot be serialised or written.
    fn save(&self) -> Result<()>;
}

#[derive(Debug, Clone)]
/// Preferences stored as a flat JSON object.
pub struct JsonPreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonPreferences {
    #[must_use]
    /// Loads preferences from `path`; a missing or corrupt file gives an empty store.
    pub fn load(path: &Path) -> Self {
        let values = match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                log::warn!("ignoring unreadable preferences {}: {e}", path.display());
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };

        Self {
            path: path.to_path_buf(),
            values,
        }
    }

    #[must_use]
    /// File the preferences are saved to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    /// The recorded last directory, if it still exists.
    pub fn last_dir(&self) -> Option<PathBuf> {
        self.get(LAST_DIR)
            .map(PathBuf::from)
            .filter(|dir| dir.is_dir())
    }
}

impl PreferenceStore for JsonPreferences {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.values).map_err(|source| {
            Error::Preferences {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "tests/prefs.rs"]
mod tests;
