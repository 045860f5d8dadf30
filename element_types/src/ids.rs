//! Unique identifiers for source elements

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a source element
///
/// Source elements are the external mounting points an editor instance
/// may be attached to during construction. The identifier names the
/// element in errors and audit output; it carries no authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceElementId(Uuid);

impl SourceElementId {
    /// Creates a new random element ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an element ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SourceElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SourceElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element({})", self.0)
    }
}
