//! roster CLI application
//!
//! Operator tooling for command trees:
//!
//! - `roster scan`             # List module candidates under the configured roots
//! - `roster check`            # Run a registration pass over declared commands
//! - `roster config show`      # Print the effective configuration
//! - `roster config validate`  # Validate the configuration file

mod args;
mod commands;
mod console;
mod logging;
mod router;

use args::Cli;
use clap::Parser;
use roster_core::RosterResult;

#[tokio::main]
async fn main() -> RosterResult<()> {
    let cli = Cli::parse();
    router::route(cli).await
}
