//! `uconv convert` command
//!
//! One-shot conversion. Successful conversions are recorded in history
//! and the event log; an unknown unit is reported, logged, and exits
//! nonzero.
//!
//! # Usage
//! ```bash
//! uconv convert length 5 meter foot
//! uconv convert temperature -- -40 celsius fahrenheit
//! uconv convert weight 2.5 pound kilogram --no-record
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::cli::utils;
use crate::config::Config;
use crate::core::convert::{convert, Category};

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Conversion category
    #[arg(value_enum)]
    pub category: Category,

    /// Value to convert (negative values allowed)
    #[arg(allow_hyphen_values = true)]
    pub value: f64,

    /// Source unit
    pub from_unit: String,

    /// Target unit
    pub to_unit: String,

    /// Do not record this conversion in history
    #[arg(long)]
    pub no_record: bool,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let config = Config::load()?;
    let log = utils::open_event_log(&config);

    // Canonical lowercase names in output, history, and log
    let from_unit = args.from_unit.to_lowercase();
    let to_unit = args.to_unit.to_lowercase();

    match convert(args.category, args.value, &from_unit, &to_unit) {
        Ok(result) => {
            println!(
                "{} {} = {} {}",
                args.value,
                from_unit,
                result.to_string().bold().green(),
                to_unit
            );

            if !args.no_record {
                let mut history = utils::open_history(&config);
                if let Err(e) =
                    history.add(args.category, args.value, &from_unit, &to_unit, result)
                {
                    eprintln!("{} {}", "Warning:".yellow(), e);
                }
            }

            log.log_conversion(args.category.name(), args.value, &from_unit, &to_unit, result);
            Ok(())
        }
        Err(e) => {
            log.log_error_conversion(args.category.name(), &e.to_string());
            Err(e.into())
        }
    }
}
