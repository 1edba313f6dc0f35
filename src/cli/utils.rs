//! CLI utility functions
//!
//! Common helper functions shared across CLI commands: opening the
//! history store and the event log from configuration.

use crate::config::Config;
use crate::core::history::HistoryStore;
use crate::core::logger::EventLog;

/// Open the history store at its configured location
pub fn open_history(config: &Config) -> HistoryStore {
    HistoryStore::load(config.history_path(), config.history.max_entries)
}

/// Attach to the event log (no session banner; one-shot commands)
pub fn open_event_log(config: &Config) -> EventLog {
    EventLog::attach(config.log_path(), config.log.console)
}
