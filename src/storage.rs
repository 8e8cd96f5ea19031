// SPDX-License-Identifier: MPL-2.0
//! Durable client-side storage for visitor preferences.
//!
//! This is the desktop counterpart of browser local storage: a flat map of
//! string keys to string values that survives restarts. It is kept apart from
//! `settings.toml` because nothing in it is meant to be hand-edited.
//!
//! The on-disk form is a CBOR-encoded map in `storage.cbor` inside the data
//! directory (see [`crate::paths`]). Every `set` writes through immediately, so
//! the last write always wins on the next load.

use crate::error::Result;
use crate::paths;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Key under which the selected language code is stored.
pub const LANGUAGE_STORAGE_KEY: &str = "i18nextLng";

const STORAGE_FILE: &str = "storage.cbor";

/// A string key/value store with durable semantics.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

/// Volatile store, used by tests and when no data directory exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-filled with the given entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// FileStore
// =============================================================================

/// CBOR-backed store persisted in the application data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    /// `None` when no data directory could be determined; the store then
    /// behaves like a [`MemoryStore`].
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store in the default data directory.
    ///
    /// Returns a tuple of (store, optional_warning). An unreadable or corrupt
    /// file yields an empty store and the i18n key of a warning.
    pub fn open() -> (Self, Option<String>) {
        Self::open_in(None)
    }

    /// Opens the store in a custom directory.
    pub fn open_in(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let path = paths::get_app_data_dir_with_override(base_dir).map(|mut dir| {
            dir.push(STORAGE_FILE);
            dir
        });

        let Some(path) = path else {
            return (
                Self {
                    path: None,
                    entries: BTreeMap::new(),
                },
                None,
            );
        };

        if !path.exists() {
            return (
                Self {
                    path: Some(path),
                    entries: BTreeMap::new(),
                },
                None,
            );
        }

        match read_entries(&path) {
            Ok(entries) => (
                Self {
                    path: Some(path),
                    entries,
                },
                None,
            ),
            Err(err) => {
                tracing::warn!(path = %path.display(), "Discarding unreadable storage: {err}");
                (
                    Self {
                        path: Some(path),
                        entries: BTreeMap::new(),
                    },
                    Some("warning-storage-load".to_string()),
                )
            }
        }
    }

    /// Location of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    let reader = BufReader::new(fs::File::open(path)?);
    let entries = ciborium::from_reader(reader)?;
    Ok(entries)
}

fn write_entries(path: &Path, entries: &BTreeMap<String, String>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(fs::File::create(path)?);
    ciborium::into_writer(entries, &mut writer)?;
    writer.flush()?;
    Ok(())
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        match &self.path {
            Some(path) => write_entries(path, &self.entries),
            None => Ok(()),
        }
    }
}
