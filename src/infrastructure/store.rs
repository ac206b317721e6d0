//! Log store abstraction and an in-memory implementation

use crate::domain::{DailyEntry, LogHistory};
use crate::error::Result;
use chrono::NaiveDate;

/// Durable home of the log history.
///
/// Implementations only need `get_all` and `replace_all`; the remaining
/// operations are derived from them.
pub trait LogStore {
    /// Every entry, ascending by date
    fn get_all(&self) -> Result<LogHistory>;

    /// Overwrite the stored history
    fn replace_all(&mut self, history: LogHistory) -> Result<()>;

    fn get_by_date(&self, date: NaiveDate) -> Result<Option<DailyEntry>> {
        Ok(self.get_all()?.get_by_date(date).cloned())
    }

    /// Insert the entry, or replace the one already logged for its date.
    /// Returns the replaced entry, if any.
    fn upsert(&mut self, entry: DailyEntry) -> Result<Option<DailyEntry>> {
        let mut history = self.get_all()?;
        let replaced = history.upsert(entry);
        self.replace_all(history)?;
        Ok(replaced)
    }

    /// Remove every entry
    fn clear(&mut self) -> Result<()> {
        self.replace_all(LogHistory::new())
    }
}

/// Log store held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryLogStore {
    history: LogHistory,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        MemoryLogStore::default()
    }

    pub fn with_history(history: LogHistory) -> Self {
        MemoryLogStore { history }
    }
}

impl LogStore for MemoryLogStore {
    fn get_all(&self) -> Result<LogHistory> {
        Ok(self.history.clone())
    }

    fn replace_all(&mut self, history: LogHistory) -> Result<()> {
        self.history = history;
        Ok(())
    }
}

impl<S: LogStore + ?Sized> LogStore for &mut S {
    fn get_all(&self) -> Result<LogHistory> {
        (**self).get_all()
    }

    fn replace_all(&mut self, history: LogHistory) -> Result<()> {
        (**self).replace_all(history)
    }
}
