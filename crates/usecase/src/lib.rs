//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: scan one directory, order the entries, hand them to a sink
//! - [`dto`]: result returned across the use case boundary
//!
//! Use cases depend on ports only, never on infrastructure.

pub mod dto;
pub mod orchestrator;

pub use dto::ListingOutput;
pub use orchestrator::{ListDirectory, sort_entries};
