// src/config.rs
use std::path::PathBuf;

use log::LevelFilter;

use crate::cli::Args;

/// Directory listed by the binary.
pub const DEFAULT_ROOT: &str = "./Drivers/STM32F4xx_HAL_Driver/Src";

/// Runtime configuration resolved from CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self { root: PathBuf::from(DEFAULT_ROOT), log_level: LevelFilter::Warn }
    }
}

impl Config {
    /// Same settings, listing `root` instead of the built-in directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self { log_level: log_level(args.verbose, args.quiet), ..Self::default() }
    }
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
