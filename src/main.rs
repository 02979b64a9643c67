use argus::cli::{Cli, Commands};
use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging with ARGUS_LOG environment variable support;
    // -v bumps the default level to debug
    let default_level = if cli.verbose > 0 { "debug" } else { "info" };
    let log_level = std::env::var("ARGUS_LOG").unwrap_or_else(|_| default_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    match run(cli) {
        Ok(0) => {}
        // Enforcement outcome: the message is already on stderr, nothing
        // else may be printed before terminating
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);

            // Use appropriate exit codes based on error type
            let exit_code = match e.downcast_ref::<argus::ArgusError>() {
                Some(argus::ArgusError::Config(_)) => 2,
                Some(argus::ArgusError::Io(_)) => 3,
                Some(argus::ArgusError::MalformedVersion(_)) => 4,
                Some(argus::ArgusError::Runtime(_)) => 5,
                _ => 1,
            };
            process::exit(exit_code);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    match cli.command {
        Commands::Check(args) => argus::cli::commands::check::run(args),
        Commands::Inspect(args) => {
            argus::cli::commands::inspect::run(args)?;
            Ok(0)
        }
    }
}
