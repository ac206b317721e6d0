//! Log history: date-ordered daily entries with at most one entry per date

use crate::domain::DailyEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily entries sorted ascending by date, unique per date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<DailyEntry>", into = "Vec<DailyEntry>")]
pub struct LogHistory {
    entries: Vec<DailyEntry>,
}

impl LogHistory {
    pub fn new() -> Self {
        LogHistory::default()
    }

    /// Build a history from entries in any order.
    /// When a date appears more than once, the later entry wins.
    pub fn from_entries(entries: impl IntoIterator<Item = DailyEntry>) -> Self {
        let mut history = LogHistory::new();
        for entry in entries {
            history.upsert(entry);
        }
        history
    }

    /// Insert an entry, replacing any existing entry for the same date.
    /// Returns the replaced entry, if there was one.
    pub fn upsert(&mut self, entry: DailyEntry) -> Option<DailyEntry> {
        match self
            .entries
            .binary_search_by_key(&entry.date, |existing| existing.date)
        {
            Ok(index) => Some(std::mem::replace(&mut self.entries[index], entry)),
            Err(index) => {
                self.entries.insert(index, entry);
                None
            }
        }
    }

    pub fn get_by_date(&self, date: NaiveDate) -> Option<&DailyEntry> {
        self.entries
            .binary_search_by_key(&date, |entry| entry.date)
            .ok()
            .map(|index| &self.entries[index])
    }

    pub fn entries(&self) -> &[DailyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The trailing `n` entries (all of them when fewer exist)
    pub fn last_n(&self, n: usize) -> &[DailyEntry] {
        trailing(&self.entries, n)
    }

    /// Everything except the trailing `n` entries
    pub fn without_last(&self, n: usize) -> &[DailyEntry] {
        without_trailing(&self.entries, n)
    }

    pub fn into_entries(self) -> Vec<DailyEntry> {
        self.entries
    }
}

/// The trailing `n` entries of a slice (all of them when fewer exist)
pub fn trailing(entries: &[DailyEntry], n: usize) -> &[DailyEntry] {
    let start = entries.len().saturating_sub(n);
    &entries[start..]
}

/// A slice with its trailing `n` entries dropped (empty when fewer exist)
pub fn without_trailing(entries: &[DailyEntry], n: usize) -> &[DailyEntry] {
    let end = entries.len().saturating_sub(n);
    &entries[..end]
}

impl From<Vec<DailyEntry>> for LogHistory {
    fn from(entries: Vec<DailyEntry>) -> Self {
        LogHistory::from_entries(entries)
    }
}

impl From<LogHistory> for Vec<DailyEntry> {
    fn from(history: LogHistory) -> Self {
        history.into_entries()
    }
}
