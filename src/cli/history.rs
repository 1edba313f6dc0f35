//! `uconv history` command
//!
//! Shows recent conversions, most-recent-first.

use anyhow::Result;
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::utils;
use crate::config::Config;
use crate::core::history::HistoryStore;

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "#")]
    index: usize,

    #[tabled(rename = "Timestamp")]
    timestamp: String,

    #[tabled(rename = "Category")]
    category: String,

    #[tabled(rename = "Conversion")]
    conversion: String,
}

pub fn run(args: HistoryArgs) -> Result<()> {
    let config = Config::load()?;
    let history = utils::open_history(&config);
    print_recent(&history, args.limit);
    Ok(())
}

/// Render the recent-conversions table. Shared with the interactive menu.
pub fn print_recent(history: &HistoryStore, limit: usize) {
    if history.is_empty() {
        println!("No conversion history available.");
        println!("Perform some conversions to see history here.");
        return;
    }

    let rows: Vec<HistoryRow> = history
        .recent(limit)
        .into_iter()
        .enumerate()
        .map(|(i, record)| HistoryRow {
            index: i + 1,
            timestamp: record.timestamp.clone(),
            category: record.category.clone(),
            conversion: record.conversion.clone(),
        })
        .collect();

    let shown = rows.len();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    println!("Conversion history (last {} entries)", shown);
    println!("{}", table);
}
