//! Shared source-element handles

use crate::ids::SourceElementId;
use crate::metadata::ElementMetadata;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Inner state shared between all handles to one element
#[derive(Debug)]
struct ElementState {
    metadata: ElementMetadata,
}

/// A cloneable handle to a source element
///
/// The element an editor mounts on is owned by the host and shared
/// between collaborators, so the handle clones cheaply and every clone
/// observes the same metadata. Equality compares element identity, not
/// metadata contents.
#[derive(Debug, Clone)]
pub struct SourceElement {
    id: SourceElementId,
    state: Rc<RefCell<ElementState>>,
}

impl SourceElement {
    /// Creates a new element with empty metadata
    pub fn new() -> Self {
        Self::with_id(SourceElementId::new())
    }

    /// Creates a new element with the given ID
    pub fn with_id(id: SourceElementId) -> Self {
        Self {
            id,
            state: Rc::new(RefCell::new(ElementState {
                metadata: ElementMetadata::new(),
            })),
        }
    }

    /// Returns the element ID
    pub fn id(&self) -> SourceElementId {
        self.id
    }

    /// Reads the element's metadata
    pub fn with_metadata<R>(&self, f: impl FnOnce(&ElementMetadata) -> R) -> R {
        f(&self.state.borrow().metadata)
    }

    /// Mutates the element's metadata
    pub fn with_metadata_mut<R>(&self, f: impl FnOnce(&mut ElementMetadata) -> R) -> R {
        f(&mut self.state.borrow_mut().metadata)
    }

    /// Checks whether a metadata key is present
    pub fn has_metadata(&self, key: &str) -> bool {
        self.with_metadata(|m| m.contains(key))
    }

    /// Sets a metadata key
    pub fn set_metadata(&self, key: impl Into<String>, value: impl Into<String>) {
        self.with_metadata_mut(|m| m.set(key, value));
    }

    /// Removes a metadata key, returning its value if it was present
    pub fn remove_metadata(&self, key: &str) -> Option<String> {
        self.with_metadata_mut(|m| m.remove(key))
    }
}

impl Default for SourceElement {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for SourceElement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SourceElement {}

impl fmt::Display for SourceElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_creation() {
        let element = SourceElement::new();
        assert!(!element.has_metadata("flag"));
    }

    #[test]
    fn test_element_with_id() {
        let id = SourceElementId::new();
        let element = SourceElement::with_id(id);
        assert_eq!(element.id(), id);
    }

    #[test]
    fn test_clones_share_metadata() {
        let element = SourceElement::new();
        let clone = element.clone();

        element.set_metadata("flag", "set");

        assert!(clone.has_metadata("flag"));
        assert_eq!(clone.with_metadata(|m| m.get("flag").map(String::from)),
            Some("set".to_string()));
    }

    #[test]
    fn test_remove_visible_through_clone() {
        let element = SourceElement::new();
        let clone = element.clone();

        element.set_metadata("flag", "set");
        clone.remove_metadata("flag");

        assert!(!element.has_metadata("flag"));
    }

    #[test]
    fn test_equality_by_id() {
        let element = SourceElement::new();
        let clone = element.clone();
        let other = SourceElement::new();

        assert_eq!(element, clone);
        assert_ne!(element, other);
    }

    #[test]
    fn test_distinct_elements_do_not_share_metadata() {
        let a = SourceElement::new();
        let b = SourceElement::new();

        a.set_metadata("flag", "set");

        assert!(!b.has_metadata("flag"));
    }
}
