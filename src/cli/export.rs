//! `uconv export` command
//!
//! Writes the history plus its statistics block to a plain-text report.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cli::utils;
use crate::config::Config;
use crate::core::history::HistoryStore;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Report file to write
    #[arg(default_value = "conversion_history_export.txt")]
    pub path: PathBuf,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let config = Config::load()?;
    let history = utils::open_history(&config);
    let log = utils::open_event_log(&config);

    export_report(&history, &args.path);
    log.log_user_action("Exported history to file");
    Ok(())
}

/// Export and print the outcome. Shared with the interactive menu.
///
/// An empty history is a no-op with a notice; an unwritable path is
/// reported, never fatal.
pub fn export_report(history: &HistoryStore, path: &std::path::Path) {
    match history.export(path) {
        Ok(0) => println!("No history to export."),
        Ok(count) => println!(
            "History exported to '{}' ({} entries).",
            path.display(),
            count
        ),
        Err(e) => eprintln!("Error exporting history: {}", e),
    }
}
