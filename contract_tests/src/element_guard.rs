//! Source-element guard contract tests
//!
//! These tests define the stable contract for the guard service.

// ===== Stable Strings =====

/// The marker key hosts may observe in element metadata
pub const EXPECTED_MARKER_KEY: &str = "editor.secured-element";

/// Prefix of the element id display form used in diagnostics
pub const ELEMENT_DISPLAY_PREFIX: &str = "Element(";
