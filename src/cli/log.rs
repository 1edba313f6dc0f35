//! `uconv log` command
//!
//! Shows a summary of the application event log.

use anyhow::Result;
use clap::Args;

use crate::cli::utils;
use crate::config::Config;
use crate::core::logger::EventLog;

#[derive(Args, Debug)]
pub struct LogArgs {}

pub fn run(_args: LogArgs) -> Result<()> {
    let config = Config::load()?;
    let log = utils::open_event_log(&config);
    print_summary(&log);
    Ok(())
}

/// Render the log summary. Shared with the interactive menu.
pub fn print_summary(log: &EventLog) {
    let summary = match log.summary() {
        Ok(summary) => summary,
        Err(_) => {
            println!("No log file found.");
            return;
        }
    };

    println!("Log file: {}", log.path().display());
    println!("  Total entries: {}", summary.total_entries);
    for (name, count) in [
        ("DEBUG", summary.debug),
        ("INFO", summary.info),
        ("WARNING", summary.warning),
        ("ERROR", summary.error),
        ("CRITICAL", summary.critical),
    ] {
        if count > 0 {
            println!("  {}: {}", name, count);
        }
    }
}
