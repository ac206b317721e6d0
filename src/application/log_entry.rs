//! Record and look up daily entries

use crate::domain::{DailyEntry, LogHistory};
use crate::error::Result;
use crate::infrastructure::LogStore;
use chrono::NaiveDate;

/// Field values to change on a day's entry; `None` leaves a field as it is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryUpdate {
    pub income_added: Option<f64>,
    pub money_spent: Option<f64>,
    pub savings_added: Option<f64>,
    pub minutes_studied: Option<f64>,
    pub skills_practiced: Option<u32>,
    pub project_work: Option<bool>,
    pub sleep_hours: Option<f64>,
    pub workout_done: Option<bool>,
    pub mood_scale: Option<u8>,
    pub prayer_done: Option<bool>,
    pub reflection_minutes: Option<f64>,
    pub practice_minutes: Option<f64>,
    pub technique_practiced: Option<bool>,
}

impl EntryUpdate {
    pub fn apply(&self, entry: &mut DailyEntry) {
        fn set<T: Copy>(target: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *target = v;
            }
        }

        set(&mut entry.finance.income_added, self.income_added);
        set(&mut entry.finance.money_spent, self.money_spent);
        set(&mut entry.finance.savings_added, self.savings_added);
        set(&mut entry.career.minutes_studied, self.minutes_studied);
        set(&mut entry.career.skills_practiced, self.skills_practiced);
        set(&mut entry.career.project_work, self.project_work);
        set(&mut entry.health.sleep_hours, self.sleep_hours);
        set(&mut entry.health.workout_done, self.workout_done);
        set(&mut entry.health.mood_scale, self.mood_scale);
        set(&mut entry.spirituality.prayer_done, self.prayer_done);
        set(
            &mut entry.spirituality.reflection_minutes,
            self.reflection_minutes,
        );
        set(&mut entry.hobbies.practice_minutes, self.practice_minutes);
        set(
            &mut entry.hobbies.technique_practiced,
            self.technique_practiced,
        );
    }
}

/// Result of recording an entry
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub entry: DailyEntry,
    /// False when an existing entry for the date was updated
    pub created: bool,
}

/// Service for logging days
pub struct LogEntryService<S: LogStore> {
    store: S,
}

impl<S: LogStore> LogEntryService<S> {
    pub fn new(store: S) -> Self {
        LogEntryService { store }
    }

    /// Apply `update` to the entry for `date`, starting from the existing
    /// entry if one was logged, otherwise from the form defaults.
    pub fn record(&mut self, date: NaiveDate, update: &EntryUpdate) -> Result<Recorded> {
        let existing = self.store.get_by_date(date)?;
        let created = existing.is_none();

        let mut entry = existing.unwrap_or_else(|| DailyEntry::new(date));
        update.apply(&mut entry);
        entry.validate()?;

        self.store.upsert(entry.clone())?;
        tracing::info!(%date, created, "Recorded daily entry");

        Ok(Recorded { entry, created })
    }

    pub fn show(&self, date: NaiveDate) -> Result<Option<DailyEntry>> {
        self.store.get_by_date(date)
    }

    pub fn history(&self) -> Result<LogHistory> {
        self.store.get_all()
    }
}
