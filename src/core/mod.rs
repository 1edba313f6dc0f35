//! Core module - Conversion engine, history store, event log
//!
//! Contains the core data structures and logic for uconv.

pub mod convert;
pub mod history;
pub mod logger;

pub use convert::{available_units, convert, Category, ConvertError, CATEGORIES};
pub use history::{ConversionRecord, HistoryError, HistoryStore, Statistics};
pub use logger::{EventLog, Level, LogSummary};
