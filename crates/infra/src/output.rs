// crates/infra/src/output.rs
use std::io::{self, BufWriter, Write};

use src_listing_ports::output::EntrySink;
use src_listing_shared_kernel::{EntryPath, InfrastructureError, Result};

/// Writes one path per line, `\n` terminated, through a buffer.
pub struct LineWriter<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> LineWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out: BufWriter::new(out) }
    }

    /// Flushes and returns the wrapped writer.
    pub fn into_inner(self) -> Result<W> {
        self.out.into_inner().map_err(|err| {
            let source = err.into_error();
            InfrastructureError::Output { message: format!("flushing listing: {source}"), source: Some(source) }
                .into()
        })
    }

    fn write_entry(&mut self, entry: &EntryPath) -> io::Result<()> {
        self.out.write_all(entry.as_bytes())?;
        self.out.write_all(b"\n")
    }
}

impl<W: Write> EntrySink for LineWriter<W> {
    fn emit(&mut self, entries: &[EntryPath]) -> Result<()> {
        for entry in entries {
            self.write_entry(entry)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
