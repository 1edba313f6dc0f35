//! History store - bounded, persisted log of conversions
//!
//! Insertion-ordered records with FIFO eviction past `max_entries`.
//! Write-through persistence: the whole JSON file is rewritten after every
//! mutation, so every successful mutation is durable before the caller
//! proceeds. A failed load degrades to an empty store; it is never an
//! error to the caller.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::convert::Category;

/// One persisted conversion event.
///
/// Fields mirror the on-disk JSON document exactly, so a saved history
/// reloads field-for-field identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// `YYYY-MM-DD HH:MM:SS`, local time
    pub timestamp: String,

    /// Capitalized category name (e.g. "Length")
    pub category: String,

    /// `"<value> <unit>"`
    pub input: String,

    /// `"<value> <unit>"`
    pub output: String,

    /// `"<input> → <output>"` display string
    pub conversion: String,
}

/// Derived usage statistics. Not stored; recomputed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_conversions: usize,

    /// Counts keyed by capitalized category name. Ordered map, so
    /// iteration (and the export report) is sorted by name.
    pub by_category: BTreeMap<String, usize>,

    /// Category with the highest count; ties go to the alphabetically
    /// first name.
    pub most_used: String,
}

/// History persistence error
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Could not write {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not encode history: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Bounded conversion history with JSON file persistence
pub struct HistoryStore {
    path: PathBuf,
    max_entries: usize,
    records: Vec<ConversionRecord>,
}

impl HistoryStore {
    /// Load history from `path`, or start empty when the file is missing
    /// or unreadable. Load failure is logged, never raised.
    pub fn load(path: impl Into<PathBuf>, max_entries: usize) -> Self {
        let path = path.into();
        let records = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(records) => records,
                Err(e) => {
                    warn!("Could not parse history file {}: {}", path.display(), e);
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!("Could not read history file {}: {}", path.display(), e);
                Vec::new()
            }
        };

        Self {
            path,
            max_entries,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record a successful conversion and persist.
    ///
    /// The in-memory append and eviction always take effect; a persistence
    /// failure is returned for the caller to report as a warning.
    pub fn add(
        &mut self,
        category: Category,
        value: f64,
        from_unit: &str,
        to_unit: &str,
        result: f64,
    ) -> Result<(), HistoryError> {
        let input = format!("{} {}", value, from_unit);
        let output = format!("{} {}", result, to_unit);

        self.records.push(ConversionRecord {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            category: category.display_name().to_string(),
            conversion: format!("{} → {}", input, output),
            input,
            output,
        });

        // FIFO eviction: keep the most recent max_entries
        if self.records.len() > self.max_entries {
            let excess = self.records.len() - self.max_entries;
            self.records.drain(..excess);
        }

        self.save()
    }

    /// Last `limit` records, most-recent-first. Returns everything when
    /// `limit` exceeds the stored count.
    pub fn recent(&self, limit: usize) -> Vec<&ConversionRecord> {
        self.records.iter().rev().take(limit).collect()
    }

    /// Usage statistics, or `None` when the history is empty
    pub fn statistics(&self) -> Option<Statistics> {
        if self.records.is_empty() {
            return None;
        }

        let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
        for record in &self.records {
            *by_category.entry(record.category.clone()).or_insert(0) += 1;
        }

        // Strictly-greater scan over the ordered map: ties keep the
        // alphabetically first category
        let mut most_used = String::new();
        let mut best = 0;
        for (name, count) in &by_category {
            if *count > best {
                best = *count;
                most_used = name.clone();
            }
        }

        Some(Statistics {
            total_conversions: self.records.len(),
            by_category,
            most_used,
        })
    }

    /// Empty the store and persist the empty file
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.records.clear();
        self.save()
    }

    /// Write a plain-text report of all records plus statistics.
    ///
    /// Returns the number of records written. An empty history writes
    /// nothing and returns 0; the caller owns the user-visible notice.
    pub fn export(&self, path: &Path) -> Result<usize, HistoryError> {
        if self.records.is_empty() {
            return Ok(0);
        }

        let rule = "=".repeat(70);
        let mut report = String::new();
        let _ = writeln!(report, "UNIT CONVERTER - CONVERSION HISTORY");
        let _ = writeln!(report, "{}", rule);
        let _ = writeln!(
            report,
            "Generated: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        let _ = writeln!(report, "{}\n", rule);

        for (i, record) in self.records.iter().enumerate() {
            let _ = writeln!(report, "{}. [{}]", i + 1, record.timestamp);
            let _ = writeln!(report, "   Category: {}", record.category);
            let _ = writeln!(report, "   Conversion: {}\n", record.conversion);
        }

        if let Some(stats) = self.statistics() {
            let _ = writeln!(report, "\n{}", rule);
            let _ = writeln!(report, "STATISTICS");
            let _ = writeln!(report, "{}", rule);
            let _ = writeln!(report, "Total Conversions: {}", stats.total_conversions);
            let _ = writeln!(report, "Most Used Category: {}\n", stats.most_used);
            let _ = writeln!(report, "By Category:");
            for (category, count) in &stats.by_category {
                let _ = writeln!(report, "  - {}: {}", category, count);
            }
        }

        std::fs::write(path, report).map_err(|source| HistoryError::Persist {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(self.records.len())
    }

    /// Overwrite the backing file with the full history
    fn save(&self) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| HistoryError::Persist {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        let content = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(&self.path, content).map_err(|source| HistoryError::Persist {
            path: self.path.clone(),
            source,
        })
    }
}
