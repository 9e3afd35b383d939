//! Preference store
//!
//! Persists tags in a JSON sidecar (`preferences.json`):
//!
//! ```json
//! {
//!   "images/a.png": { "imagePath": "images/a.png", "public": true }
//! }
//! ```
//!
//! A missing key means the image is untagged. Every mutation is written
//! back to disk before it returns.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading or writing the preferences file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The user's choice for one image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// Filled in from the map key on load when absent
    #[serde(rename = "imagePath", default)]
    pub image_path: String,

    /// Older files call this field `liked`; absent means private
    #[serde(rename = "public", alias = "liked", default)]
    pub is_public: bool,
}

impl PreferenceRecord {
    pub fn new(image_path: impl Into<String>, is_public: bool) -> Self {
        Self {
            image_path: image_path.into(),
            is_public,
        }
    }
}

/// Image path -> tag, backed by a JSON file
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    records: BTreeMap<String, PreferenceRecord>,
}

impl PreferenceStore {
    /// An empty store that will persist to `path`
    pub fn empty<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            records: BTreeMap::new(),
        }
    }

    /// Load the store from `path`
    ///
    /// A missing file is not an error and yields an empty store.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No preferences at {}, starting empty", path.display());
                return Ok(Self::empty(path));
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let mut records: BTreeMap<String, PreferenceRecord> = serde_json::from_str(&content)
            .map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        // The key wins when a record disagrees with it
        for (key, record) in records.iter_mut() {
            if record.image_path != *key {
                warn!(
                    "Record for {} names {}, using the key",
                    key, record.image_path
                );
                record.image_path = key.clone();
            }
        }

        debug!("Loaded {} record(s) from {}", records.len(), path.display());

        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    /// Write the store to `path` as indented JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(&self.records).map_err(StoreError::Serialize)?;
        fs::write(path, content).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Saved {} record(s) to {}", self.records.len(), path.display());
        Ok(())
    }

    /// Write the store to the file it was loaded from
    pub fn persist(&self) -> Result<(), StoreError> {
        self.save(&self.path)
    }

    pub fn get(&self, image_path: &str) -> Option<&PreferenceRecord> {
        self.records.get(image_path)
    }

    pub fn contains(&self, image_path: &str) -> bool {
        self.records.contains_key(image_path)
    }

    /// Tag `image_path` and persist
    pub fn set(&mut self, image_path: &str, is_public: bool) -> Result<(), StoreError> {
        self.records.insert(
            image_path.to_string(),
            PreferenceRecord::new(image_path, is_public),
        );
        self.persist()
    }

    /// Untag `image_path` (no-op if untagged) and persist
    pub fn delete(&mut self, image_path: &str) -> Result<(), StoreError> {
        self.records.remove(image_path);
        self.persist()
    }

    /// Records in path order
    pub fn records(&self) -> impl Iterator<Item = &PreferenceRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
