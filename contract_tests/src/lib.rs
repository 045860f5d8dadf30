//! # Guard Contract Tests
//!
//! This crate provides "golden" tests for the source-element guard
//! contract to ensure it doesn't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: The stable surface is written as code
//! - **Testability first**: Contract tests fail when the surface changes
//! - **Mechanism not policy**: Define what must be stable, not how to use it
//!
//! ## Structure
//!
//! Hosts persist element ids in diagnostics and key the binding marker
//! by name, so the tests pin:
//! - The marker key string
//! - The duplicate-binding error message shape
//! - The element id wire format

pub mod element_guard;
