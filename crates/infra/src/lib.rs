// crates/infra/src/lib.rs
pub mod filesystem;
pub mod output;

pub use filesystem::StdDirectoryScanner;
pub use output::LineWriter;
