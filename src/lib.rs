//! uconv - Precision unit conversions with history tracking
//!
//! Interactive command-line unit converter for four categories: length,
//! temperature, weight, time.
//!
//! ## Key Concepts
//!
//! - **Conversion engine**: pure functions over immutable static unit
//!   tables; scale-based categories normalize through a base unit,
//!   temperature pivots through Celsius
//! - **History store**: bounded FIFO log of conversions, written through
//!   to a JSON file after every mutation
//! - **Event log**: append-only plain-text audit trail with session
//!   banners

pub mod cli;
pub mod config;
pub mod core;

pub use config::Config;
pub use core::convert::{available_units, convert, Category, ConvertError};
pub use core::history::{ConversionRecord, HistoryStore, Statistics};
pub use core::logger::{EventLog, LogSummary};
