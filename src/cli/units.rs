//! `uconv units` command
//!
//! Lists the available units, for one category or all of them.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::core::convert::{Category, CATEGORIES};

#[derive(Args, Debug)]
pub struct UnitsArgs {
    /// Category to list (all categories when omitted)
    #[arg(value_enum)]
    pub category: Option<Category>,
}

pub fn run(args: UnitsArgs) -> Result<()> {
    match args.category {
        Some(category) => print_units(category),
        None => {
            for category in CATEGORIES {
                print_units(category);
            }
        }
    }
    Ok(())
}

fn print_units(category: Category) {
    println!("{}", category.display_name().bold());
    println!("  {}", category.units().join(", "));
}
