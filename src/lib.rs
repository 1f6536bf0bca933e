// src/lib.rs
pub mod bootstrap;
pub mod cli;
pub mod config;

pub use config::{Config, DEFAULT_ROOT};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
