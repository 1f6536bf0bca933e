// crates/usecase/src/dto.rs
use src_listing_shared_kernel::EntryPath;

/// Ordered entries produced by a listing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOutput {
    pub entries: Vec<EntryPath>,
}

impl ListingOutput {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
