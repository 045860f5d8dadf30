//! # Source-Element Guard Service
//!
//! Prevents a source element from being bound to more than one live
//! editor instance at a time.
//!
//! ## Philosophy
//!
//! - **Fail at construction**: A duplicate binding is rejected before the
//!   element is used for anything else
//! - **Marker on the element**: The element's own metadata carries the
//!   binding flag; the guard holds no state of its own
//! - **Cleanup is tied to lifecycle**: The marker is cleared by the
//!   editor's one-time destroy event, never manually
//! - **Testable**: Works against any `EditorHost`, including fakes
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - An editor registry (no listing of live bindings)
//! - A lock (nothing blocks; the second binding fails immediately)
//! - A DOM abstraction
//!
//! ## Example
//!
//! ```
//! use editor_lifecycle::EditorShell;
//! use element_types::SourceElement;
//! use services_element_guard::secure_source_element;
//!
//! let element = SourceElement::new();
//! let editor = EditorShell::with_source_element(element.clone());
//!
//! secure_source_element(&editor).unwrap();
//!
//! // A second editor on the same element is rejected until the first
//! // one is destroyed.
//! let rival = EditorShell::with_source_element(element.clone());
//! assert!(secure_source_element(&rival).is_err());
//!
//! editor.destroy();
//! assert!(secure_source_element(&rival).is_ok());
//! ```

use editor_lifecycle::EditorHost;
use element_types::SourceElementId;
use thiserror::Error;

/// Metadata key marking an element as bound to a live editor instance
///
/// The key's presence is the binding signal; the stored value is a label
/// and never participates in the check.
pub const SECURED_MARKER_KEY: &str = "editor.secured-element";

/// Guard error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuardError {
    /// The element was passed to two editor construction calls
    #[error("Source element {element} is already bound to another editor instance")]
    DuplicateElementBinding { element: SourceElementId },
}

/// Marks the editor's source element, preventing other editor instances
/// from using it
///
/// Running multiple editors on the same source element corrupts both, so
/// hosts call this as soon as the element is known, before it is used
/// for any other purpose.
///
/// - Editors without a source element need no protection; the call is a
///   no-op.
/// - If the element is already marked, the call fails with
///   [`GuardError::DuplicateElementBinding`] and registers nothing.
/// - Otherwise the element is marked and a one-time destroy subscription
///   is registered to clear the marker when the editor is torn down.
pub fn secure_source_element<E: EditorHost + ?Sized>(editor: &E) -> Result<(), GuardError> {
    let element = match editor.source_element() {
        Some(element) => element,
        None => return Ok(()),
    };

    if element.has_metadata(SECURED_MARKER_KEY) {
        return Err(GuardError::DuplicateElementBinding {
            element: element.id(),
        });
    }

    element.set_metadata(SECURED_MARKER_KEY, "true");

    editor.once_destroy(Box::new(move || {
        element.remove_metadata(SECURED_MARKER_KEY);
    }));

    Ok(())
}
