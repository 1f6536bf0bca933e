// crates/ports/src/output.rs
use src_listing_shared_kernel::{EntryPath, Result};

/// Port receiving the finished, ordered listing.
pub trait EntrySink {
    fn emit(&mut self, entries: &[EntryPath]) -> Result<()>;
}
