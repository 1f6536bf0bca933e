//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: enumeration of a single directory
//! - [`output`]: destination for the ordered listing
//!
//! The use case depends on these traits only, so it can be driven by an
//! in-memory scanner in tests.

// crates/ports/src/lib.rs
pub mod filesystem;
pub mod output;
