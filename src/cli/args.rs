// src/cli/args.rs
use clap::{ArgAction, Parser};

/// Top-level CLI arguments parsed via clap.
///
/// None of these change what is listed; they only tune diagnostics on stderr.
#[derive(Parser, Debug, Default)]
#[command(
    name = "src_listing",
    version = crate::VERSION,
    about = "Prints the entries of ./Drivers/STM32F4xx_HAL_Driver/Src, sorted, one per line"
)]
pub struct Args {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Disable log output entirely
    #[arg(short, long)]
    pub quiet: bool,
}
