// crates/shared-kernel/src/lib.rs
pub use error::{ApplicationError, ErrorContext, InfraResult, InfrastructureError, ListingError, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::EntryPath;
