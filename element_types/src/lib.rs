//! # Element Types
//!
//! This crate defines the source-element side of the editor binding
//! contract: stable element identifiers and the per-element metadata
//! store collaborators mark.
//!
//! ## Philosophy
//!
//! - **Handles, not globals**: Elements are cloneable shared handles,
//!   never ambient singletons
//! - **Presence over value**: Metadata flags are meaningful by key
//!   presence; stored values are labels
//! - **Testable**: Metadata can be inspected and faked without a host
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A DOM abstraction (no tree, no attributes, no rendering)
//! - A document model
//! - A storage layer

pub mod element;
pub mod ids;
pub mod metadata;

pub use element::SourceElement;
pub use ids::SourceElementId;
pub use metadata::ElementMetadata;
