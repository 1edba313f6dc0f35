//! Interactive mode - menu-driven conversion shell
//!
//! Entered when `uconv` runs with no subcommand. One history store and
//! one event log live for the whole session; every menu action is
//! logged, and conversion errors are displayed and logged without ever
//! leaving the loop.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli;
use crate::config::Config;
use crate::core::convert::{convert, Category};
use crate::core::history::HistoryStore;
use crate::core::logger::EventLog;

const MENU_ITEMS: &[&str] = &[
    "Length conversion (meter, kilometer, mile, foot, inch, ...)",
    "Temperature conversion (celsius, fahrenheit, kelvin)",
    "Weight conversion (kilogram, gram, pound, ounce, ...)",
    "Time conversion (second, minute, hour, day, ...)",
    "View conversion history",
    "View usage statistics",
    "Export history to file",
    "Clear history",
    "View application logs",
    "Exit",
];

pub fn run() -> Result<()> {
    let config = Config::load()?;
    let mut history = cli::utils::open_history(&config);
    let log = EventLog::open(config.log_path(), config.log.console);

    show_banner();
    log.log_user_action("Application started");

    loop {
        println!();
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Main menu")
            .items(MENU_ITEMS)
            .default(0)
            .interact_opt();

        match choice {
            Ok(Some(0)) => convert_flow(Category::Length, &mut history, &log),
            Ok(Some(1)) => convert_flow(Category::Temperature, &mut history, &log),
            Ok(Some(2)) => convert_flow(Category::Weight, &mut history, &log),
            Ok(Some(3)) => convert_flow(Category::Time, &mut history, &log),
            Ok(Some(4)) => {
                log.log_user_action("Viewed conversion history");
                cli::history::print_recent(&history, config.history.display_limit);
            }
            Ok(Some(5)) => {
                log.log_user_action("Viewed usage statistics");
                cli::stats::print_statistics(&history);
            }
            Ok(Some(6)) => {
                log.log_user_action("Exported history to file");
                cli::export::export_report(
                    &history,
                    std::path::Path::new("conversion_history_export.txt"),
                );
            }
            Ok(Some(7)) => clear_flow(&mut history, &log),
            Ok(Some(8)) => {
                log.log_user_action("Viewed application logs");
                cli::log::print_summary(&log);
            }
            Ok(Some(_)) | Ok(None) | Err(_) => {
                exit_flow(&history, &log);
                return Ok(());
            }
        }
    }
}

fn show_banner() {
    let rule = "=".repeat(70);
    println!("{}", rule);
    println!("{}", "UNIT CONVERTER PRO".bold());
    println!("{}", rule);
    println!("Precision unit conversions with history tracking");
    println!("Supports: Length, Temperature, Weight, Time");
    println!("{}", rule);
}

/// Prompt for value and units, convert, record, and report
fn convert_flow(category: Category, history: &mut HistoryStore, log: &EventLog) {
    log.log_user_action(&format!("Selected {} conversion", category.display_name()));

    println!();
    println!("{}", format!("{} CONVERSION", category.name().to_uppercase()).bold());
    let units = category.units();
    println!("Available units: {}", units.join(", "));

    let value = match Input::<f64>::with_theme(&ColorfulTheme::default())
        .with_prompt("Value to convert")
        .interact_text()
    {
        Ok(value) => value,
        Err(_) => {
            println!("Input cancelled.");
            return;
        }
    };

    let Some(from_unit) = select_unit("From unit", &units) else {
        println!("Input cancelled.");
        return;
    };
    let Some(to_unit) = select_unit("To unit", &units) else {
        println!("Input cancelled.");
        return;
    };

    match convert(category, value, from_unit, to_unit) {
        Ok(result) => {
            let rule = "=".repeat(70);
            println!();
            println!("{}", rule);
            println!("{}", "CONVERSION RESULT".bold());
            println!("{}", rule);
            println!(
                "{} {} = {} {}",
                value,
                from_unit,
                result.to_string().bold().green(),
                to_unit
            );
            println!("{}", rule);

            if let Err(e) = history.add(category, value, from_unit, to_unit, result) {
                eprintln!("{} {}", "Warning:".yellow(), e);
            }
            log.log_conversion(category.name(), value, from_unit, to_unit, result);
        }
        Err(e) => {
            eprintln!("{} {}", "ERROR:".red().bold(), e);
            log.log_error_conversion(category.name(), &e.to_string());
        }
    }
}

fn select_unit<'a>(prompt: &str, units: &[&'a str]) -> Option<&'a str> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(units)
        .default(0)
        .interact_opt()
        .ok()
        .flatten()
        .map(|i| units[i])
}

fn clear_flow(history: &mut HistoryStore, log: &EventLog) {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Clear all conversion history?")
        .default(false)
        .interact()
        .unwrap_or(false);

    if !confirmed {
        println!("History clear cancelled.");
        return;
    }

    match history.clear() {
        Ok(()) => {
            println!("Conversion history cleared successfully.");
            log.log_user_action("Cleared conversion history");
        }
        Err(e) => eprintln!("{} {}", "Warning:".yellow(), e),
    }
}

fn exit_flow(history: &HistoryStore, log: &EventLog) {
    log.log_user_action("Exiting application");

    let rule = "=".repeat(70);
    println!();
    println!("{}", rule);
    println!("Thank you for using Unit Converter Pro!");
    println!("{}", rule);

    if let Some(stats) = history.statistics() {
        println!();
        println!("Session summary:");
        println!("  Total conversions performed: {}", stats.total_conversions);
        println!("  Most used category: {}", stats.most_used);
    }

    println!();
    println!("Your conversion history has been saved.");
    log.close_session();
}
