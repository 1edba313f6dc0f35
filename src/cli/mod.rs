//! CLI module - Command definitions and handlers

use clap::{Parser, Subcommand};

pub mod clear;
pub mod config_cmd;
pub mod convert;
pub mod export;
pub mod history;
pub mod interactive;
pub mod log;
pub mod stats;
pub mod units;
pub mod utils;

/// uconv - Precision unit conversions with history tracking
///
/// Runs the interactive converter when no command is given.
#[derive(Parser, Debug)]
#[command(name = "uconv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a value between two units
    Convert(convert::ConvertArgs),

    /// List available units
    Units(units::UnitsArgs),

    /// Show recent conversions
    History(history::HistoryArgs),

    /// Show usage statistics
    Stats(stats::StatsArgs),

    /// Export history to a text report
    Export(export::ExportArgs),

    /// Clear conversion history
    Clear(clear::ClearArgs),

    /// Show event log summary
    Log(log::LogArgs),

    /// Get or set configuration
    Config(config_cmd::ConfigArgs),
}
