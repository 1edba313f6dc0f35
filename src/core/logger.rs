//! Event log - append-only application audit trail
//!
//! Plain-text lines of the form `[<timestamp ms>] [<LEVEL   >] <message>`,
//! with session start/end bracketed by banner lines. A failed write warns
//! on stderr and is otherwise swallowed; logging never takes the process
//! down.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Log severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Per-level line counts read back from the log file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogSummary {
    pub total_entries: usize,
    pub debug: usize,
    pub info: usize,
    pub warning: usize,
    pub error: usize,
    pub critical: usize,
}

/// Append-only application event log
pub struct EventLog {
    path: PathBuf,
    console: bool,
    session_start: DateTime<Local>,
}

impl EventLog {
    /// Open the log without a session banner. One-shot commands append
    /// here; interactive sessions use [`EventLog::open`] so start and end
    /// are bracketed.
    pub fn attach(path: impl Into<PathBuf>, console: bool) -> Self {
        Self {
            path: path.into(),
            console,
            session_start: Local::now(),
        }
    }

    /// Open the log and write the session-start banner
    pub fn open(path: impl Into<PathBuf>, console: bool) -> Self {
        let log = Self::attach(path, console);

        let banner = "=".repeat(60);
        log.write(Level::Info, &banner);
        log.write(
            Level::Info,
            &format!(
                "Application started - Session: {}",
                log.session_start.format("%Y-%m-%d %H:%M:%S")
            ),
        );
        log.write(Level::Info, &banner);
        log
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn debug(&self, message: &str) {
        self.write(Level::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.write(Level::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.write(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.write(Level::Error, message);
    }

    pub fn critical(&self, message: &str) {
        self.write(Level::Critical, message);
    }

    /// Record a successful conversion
    pub fn log_conversion(
        &self,
        category: &str,
        value: f64,
        from_unit: &str,
        to_unit: &str,
        result: f64,
    ) {
        self.info(&format!(
            "Conversion - {}: {} {} → {} {}",
            category, value, from_unit, result, to_unit
        ));
    }

    /// Record a failed conversion
    pub fn log_error_conversion(&self, category: &str, error: &str) {
        self.error(&format!("Conversion failed - {}: {}", category, error));
    }

    /// Record a user action
    pub fn log_user_action(&self, action: &str) {
        self.info(&format!("User action: {}", action));
    }

    /// Write the session-end banner with the session duration
    pub fn close_session(&self) {
        let duration = Local::now() - self.session_start;
        let banner = "=".repeat(60);
        self.write(Level::Info, &banner);
        self.write(
            Level::Info,
            &format!("Application closed - Duration: {}s", duration.num_seconds()),
        );
        self.write(Level::Info, &banner);
    }

    /// Count log entries per level from the backing file
    pub fn summary(&self) -> std::io::Result<LogSummary> {
        let content = std::fs::read_to_string(&self.path)?;

        let mut summary = LogSummary::default();
        for line in content.lines() {
            summary.total_entries += 1;
            for level in Level::ALL {
                if line.contains(&format!("[{}", level.as_str())) {
                    match level {
                        Level::Debug => summary.debug += 1,
                        Level::Info => summary.info += 1,
                        Level::Warning => summary.warning += 1,
                        Level::Error => summary.error += 1,
                        Level::Critical => summary.critical += 1,
                    }
                    break;
                }
            }
        }

        Ok(summary)
    }

    fn write(&self, level: Level, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let entry = format!("[{}] [{:<8}] {}", timestamp, level, message);

        if let Err(e) = self.append(&entry) {
            eprintln!("Warning: could not write log: {}", e);
        }

        if self.console {
            println!("{}", entry);
        }
    }

    fn append(&self, entry: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_session_banner_written() {
        let dir = tempdir().unwrap();
        let log = EventLog::open(dir.path().join("app.log"), false);

        let content = std::fs::read_to_string(log.path()).unwrap();
        assert!(content.contains("Application started - Session:"));
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_line_format_and_level_padding() {
        let dir = tempdir().unwrap();
        let log = EventLog::open(dir.path().join("app.log"), false);
        log.info("hello");
        log.warning("careful");

        let content = std::fs::read_to_string(log.path()).unwrap();
        assert!(content.contains("[INFO    ] hello"));
        assert!(content.contains("[WARNING ] careful"));

        // [YYYY-MM-DD HH:MM:SS.mmm] prefix
        let line = content.lines().last().unwrap();
        assert_eq!(&line[0..1], "[");
        assert_eq!(&line[24..25], "]");
    }

    #[test]
    fn test_log_conversion_lines() {
        let dir = tempdir().unwrap();
        let log = EventLog::open(dir.path().join("app.log"), false);
        log.log_conversion("length", 1.0, "mile", "kilometer", 1.609344);
        log.log_error_conversion("length", "Invalid length unit: lightyear");
        log.log_user_action("Viewed conversion history");

        let content = std::fs::read_to_string(log.path()).unwrap();
        assert!(content.contains("Conversion - length: 1 mile → 1.609344 kilometer"));
        assert!(content.contains("[ERROR   ] Conversion failed - length: Invalid length unit: lightyear"));
        assert!(content.contains("User action: Viewed conversion history"));
    }

    #[test]
    fn test_append_only_across_sessions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");

        let first = EventLog::open(&path, false);
        first.info("first session");
        first.close_session();

        let second = EventLog::open(&path, false);
        second.info("second session");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("first session"));
        assert!(content.contains("Application closed - Duration:"));
        assert!(content.contains("second session"));
    }

    #[test]
    fn test_summary_counts() {
        let dir = tempdir().unwrap();
        let log = EventLog::open(dir.path().join("app.log"), false);
        log.debug("d");
        log.info("i");
        log.warning("w");
        log.error("e1");
        log.error("e2");

        let summary = log.summary().unwrap();
        // 3 banner lines + 5 entries
        assert_eq!(summary.total_entries, 8);
        assert_eq!(summary.debug, 1);
        assert_eq!(summary.info, 4);
        assert_eq!(summary.warning, 1);
        assert_eq!(summary.error, 2);
        assert_eq!(summary.critical, 0);
    }
}
