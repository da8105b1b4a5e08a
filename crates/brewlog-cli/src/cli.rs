//! CLI argument definitions.

use clap::Parser;

use crate::commands::Command;

/// Log coffee purchases and tastings.
#[derive(Parser, Debug)]
#[command(name = "brewlog")]
#[command(author, version = env!("BREWLOG_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}
