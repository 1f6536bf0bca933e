// crates/infra/src/filesystem.rs
use std::{fs, path::Path};

use src_listing_ports::filesystem::DirectoryScanner;
use src_listing_shared_kernel::{EntryPath, InfraResult, InfrastructureError, Result};

/// Filesystem adapter implementing the `DirectoryScanner` port with `std::fs::read_dir`.
///
/// Every member is reported, files, subdirectories, symlinks and hidden
/// entries alike. Paths are `root.join(name)`, so they keep the root exactly
/// as the caller spelled it.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDirectoryScanner;

impl StdDirectoryScanner {
    pub fn new() -> Self {
        Self
    }

    pub fn read_entries(root: &Path) -> InfraResult<Vec<EntryPath>> {
        log::debug!("scanning {}", root.display());
        let dir = fs::read_dir(root)
            .map_err(|source| InfrastructureError::DirectoryRead { path: root.to_path_buf(), source })?;

        let mut entries = Vec::new();
        for entry in dir {
            let entry =
                entry.map_err(|source| InfrastructureError::EntryRead { path: root.to_path_buf(), source })?;
            let path = EntryPath::new(entry.path());
            log::trace!("found {path}");
            entries.push(path);
        }
        log::debug!("{} entries under {}", entries.len(), root.display());
        Ok(entries)
    }
}

impl DirectoryScanner for StdDirectoryScanner {
    fn scan(&self, root: &Path) -> Result<Vec<EntryPath>> {
        Ok(Self::read_entries(root)?)
    }
}
