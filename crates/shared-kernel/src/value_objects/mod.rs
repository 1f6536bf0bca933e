// crates/shared-kernel/src/value_objects/mod.rs
pub mod entry_path;

pub use entry_path::EntryPath;
