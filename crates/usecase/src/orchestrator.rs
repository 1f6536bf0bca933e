// crates/usecase/src/orchestrator.rs
use std::path::Path;

use src_listing_ports::{filesystem::DirectoryScanner, output::EntrySink};
use src_listing_shared_kernel::{ApplicationError, EntryPath, ErrorContext, Result};

use crate::dto::ListingOutput;

/// Sorts entries in ascending order of their full path string.
///
/// Stable, so equal paths keep their relative order.
pub fn sort_entries(entries: &mut [EntryPath]) {
    entries.sort();
}

pub struct ListDirectory<'a> {
    scanner: &'a dyn DirectoryScanner,
}

impl<'a> ListDirectory<'a> {
    pub fn new(scanner: &'a dyn DirectoryScanner) -> Self {
        Self { scanner }
    }

    /// Scans `root` completely and returns its entries in sorted order.
    pub fn collect(&self, root: &Path) -> Result<ListingOutput> {
        let mut entries = self.scanner.scan(root).map_err(|source| ApplicationError::ListingFailed {
            root: root.to_path_buf(),
            source: Box::new(source),
        })?;
        sort_entries(&mut entries);
        log::info!("listed {} entries under {}", entries.len(), root.display());
        Ok(ListingOutput { entries })
    }

    /// Collects the listing, then writes it to `sink`.
    ///
    /// Nothing reaches the sink when the scan fails.
    pub fn run(&self, root: &Path, sink: &mut dyn EntrySink) -> Result<ListingOutput> {
        let output = self.collect(root)?;
        sink.emit(&output.entries).context("writing listing")?;
        Ok(output)
    }
}
