// src/bootstrap.rs
use std::io::Write;

use anyhow::{Context, Result};
use src_listing_infra::{LineWriter, StdDirectoryScanner};
use src_listing_usecase::{ListDirectory, ListingOutput};

use crate::config::Config;

/// Installs the stderr logger. `RUST_LOG` overrides the level chosen on the command line.
pub fn init_logger(config: &Config) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .try_init()
        .context("installing logger")
}

/// Lists `config.root` to stdout.
pub fn run(config: &Config) -> Result<()> {
    list_to(config, std::io::stdout())?;
    Ok(())
}

/// Lists `config.root` into `out`, returning the entries that were written.
pub fn list_to<W: Write>(config: &Config, out: W) -> Result<ListingOutput> {
    let scanner = StdDirectoryScanner::new();
    let mut sink = LineWriter::new(out);
    let output = ListDirectory::new(&scanner).run(&config.root, &mut sink)?;
    Ok(output)
}
