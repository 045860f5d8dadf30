//! Per-element metadata store

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// String-keyed metadata attached to a source element
///
/// Collaborators mark an element by setting well-known keys. A flag key
/// is meaningful through its presence; the stored value is a label and
/// never participates in presence checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementMetadata {
    entries: BTreeMap<String, String>,
}

impl ElementMetadata {
    /// Creates an empty metadata store
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Sets a key, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value stored under a key, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Checks whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes a key, returning its value if it was present
    ///
    /// Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Returns the number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
