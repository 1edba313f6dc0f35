//! Stats command - Show usage statistics

use clap::Args;
use colored::Colorize;

use crate::cli::utils;
use crate::config::Config;
use crate::core::history::HistoryStore;

/// Stats command arguments
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute stats command
pub fn execute(args: StatsArgs) -> anyhow::Result<()> {
    let config = Config::load()?;
    let history = utils::open_history(&config);

    if args.json {
        match history.statistics() {
            Some(stats) => {
                let json = serde_json::json!({
                    "total_conversions": stats.total_conversions,
                    "by_category": stats.by_category,
                    "most_used": stats.most_used,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            None => println!("null"),
        }
    } else {
        print_statistics(&history);
    }

    Ok(())
}

/// Render the statistics block. Shared with the interactive menu.
pub fn print_statistics(history: &HistoryStore) {
    let Some(stats) = history.statistics() else {
        println!("No statistics available yet.");
        return;
    };

    println!("{}", "Usage statistics".bold());
    println!();
    println!("  Total conversions:  {}", stats.total_conversions);
    println!("  Most used category: {}", stats.most_used);
    println!();
    println!("  By category:");
    for (category, count) in &stats.by_category {
        let bar = "█".repeat(count * 2);
        println!("    {:12} {} ({})", category, bar, count);
    }
}
