//! `uconv clear` command
//!
//! Empties the conversion history after a confirmation prompt.

use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::utils;
use crate::config::Config;

#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}

pub fn run(args: ClearArgs) -> Result<()> {
    let config = Config::load()?;

    if !args.force {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Clear all conversion history?")
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmed {
            println!("History clear cancelled.");
            return Ok(());
        }
    }

    let mut history = utils::open_history(&config);
    let log = utils::open_event_log(&config);

    match history.clear() {
        Ok(()) => {
            println!("Conversion history cleared successfully.");
            log.log_user_action("Cleared conversion history");
        }
        Err(e) => eprintln!("Warning: {}", e),
    }

    Ok(())
}
