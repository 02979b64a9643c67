pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "argus",
    version,
    about = "Node.js runtime version guard for hosted applications",
    long_about = "Argus validates the Node.js version a host application is about to run on \
                  against the version it was built for, refusing startup on an incompatible \
                  runtime unless an override environment variable is set."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the runtime version and enforce the result
    Check(commands::check::CheckArgs),

    /// Report the guard inputs and verdict without enforcing
    Inspect(commands::inspect::InspectArgs),
}
