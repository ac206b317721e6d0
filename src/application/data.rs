//! Export, import, and reset of the whole log history

use crate::domain::{DailyEntry, LogHistory};
use crate::error::Result;
use crate::infrastructure::LogStore;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub updated: usize,
}

pub struct DataService<S: LogStore> {
    store: S,
}

impl<S: LogStore> DataService<S> {
    pub fn new(store: S) -> Self {
        DataService { store }
    }

    /// Write every entry to `path` as a JSON array. Returns the entry count.
    pub fn export(&self, path: &Path) -> Result<usize> {
        let history = self.store.get_all()?;
        fs::write(path, serde_json::to_string_pretty(&history)?)?;

        tracing::info!(path = %path.display(), entries = history.len(), "Exported logs");
        Ok(history.len())
    }

    /// Merge entries from a JSON export, replacing entries on matching dates.
    /// Nothing is written unless every imported entry is valid.
    pub fn import(&mut self, path: &Path) -> Result<ImportSummary> {
        let contents = fs::read_to_string(path)?;
        let incoming: Vec<DailyEntry> = serde_json::from_str(&contents)?;
        for entry in &incoming {
            entry.validate()?;
        }

        let mut history = self.store.get_all()?;
        let mut summary = ImportSummary {
            added: 0,
            updated: 0,
        };
        for entry in incoming {
            match history.upsert(entry) {
                Some(_) => summary.updated += 1,
                None => summary.added += 1,
            }
        }
        self.store.replace_all(history)?;

        tracing::info!(
            path = %path.display(),
            added = summary.added,
            updated = summary.updated,
            "Imported logs"
        );
        Ok(summary)
    }

    /// Delete every entry. Returns how many were removed.
    pub fn reset(&mut self) -> Result<usize> {
        let removed = self.store.get_all()?.len();
        self.store.replace_all(LogHistory::new())?;

        tracing::info!(removed, "Reset log history");
        Ok(removed)
    }
}
