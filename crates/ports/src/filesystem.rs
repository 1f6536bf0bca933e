// crates/ports/src/filesystem.rs
use std::path::Path;

use src_listing_shared_kernel::{EntryPath, Result};

/// Port for enumerating the immediate members of one directory.
///
/// Implementations return entries in whatever order the platform yields them
/// and never descend into subdirectories.
pub trait DirectoryScanner {
    fn scan(&self, root: &Path) -> Result<Vec<EntryPath>>;
}
