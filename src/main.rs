// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use src_listing::{bootstrap, cli::Args, config::Config};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    if let Err(e) = bootstrap::init_logger(&config) {
        eprintln!("Logger Error: {e}");
    }

    match bootstrap::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
