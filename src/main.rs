//! uconv CLI - Entry point
//!
//! Usage: uconv [command] [options]
//!
//! Runs the interactive converter when no command is given.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uconv::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run command
    match cli.command {
        Some(Commands::Convert(args)) => uconv::cli::convert::run(args),
        Some(Commands::Units(args)) => uconv::cli::units::run(args),
        Some(Commands::History(args)) => uconv::cli::history::run(args),
        Some(Commands::Stats(args)) => uconv::cli::stats::execute(args),
        Some(Commands::Export(args)) => uconv::cli::export::run(args),
        Some(Commands::Clear(args)) => uconv::cli::clear::run(args),
        Some(Commands::Log(args)) => uconv::cli::log::run(args),
        Some(Commands::Config(args)) => uconv::cli::config_cmd::run(args),
        None => uconv::cli::interactive::run(),
    }
}
