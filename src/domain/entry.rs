//! Daily log entry: one record of self-logged activity per calendar date

use crate::error::{LifeosError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SLEEP_HOURS: f64 = 7.0;
pub const DEFAULT_MOOD: u8 = 3;
pub const MIN_MOOD: u8 = 1;
pub const MAX_MOOD: u8 = 5;
pub const MAX_SLEEP_HOURS: f64 = 24.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceLog {
    pub income_added: f64,
    pub money_spent: f64,
    pub savings_added: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerLog {
    pub minutes_studied: f64,
    pub skills_practiced: u32,
    pub project_work: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthLog {
    pub sleep_hours: f64,
    pub workout_done: bool,
    /// 1 (low) to 5 (high)
    pub mood_scale: u8,
}

impl Default for HealthLog {
    fn default() -> Self {
        HealthLog {
            sleep_hours: DEFAULT_SLEEP_HOURS,
            workout_done: false,
            mood_scale: DEFAULT_MOOD,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiritualityLog {
    pub prayer_done: bool,
    pub reflection_minutes: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HobbiesLog {
    pub practice_minutes: f64,
    pub technique_practiced: bool,
}

/// Everything logged for a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub finance: FinanceLog,
    pub career: CareerLog,
    pub health: HealthLog,
    pub spirituality: SpiritualityLog,
    pub hobbies: HobbiesLog,
}

impl DailyEntry {
    /// Create an entry with the defaults a fresh log form starts from
    pub fn new(date: NaiveDate) -> Self {
        DailyEntry {
            date,
            finance: FinanceLog::default(),
            career: CareerLog::default(),
            health: HealthLog::default(),
            spirituality: SpiritualityLog::default(),
            hobbies: HobbiesLog::default(),
        }
    }

    /// Check every field against its accepted range
    pub fn validate(&self) -> Result<()> {
        check_amount("incomeAdded", self.finance.income_added)?;
        check_amount("moneySpent", self.finance.money_spent)?;
        check_amount("savingsAdded", self.finance.savings_added)?;
        check_amount("minutesStudied", self.career.minutes_studied)?;
        check_amount("reflectionMinutes", self.spirituality.reflection_minutes)?;
        check_amount("practiceMinutes", self.hobbies.practice_minutes)?;

        let sleep = self.health.sleep_hours;
        if !sleep.is_finite() || !(0.0..=MAX_SLEEP_HOURS).contains(&sleep) {
            return Err(LifeosError::InvalidEntry(format!(
                "sleepHours must be between 0 and {} (got {})",
                MAX_SLEEP_HOURS, sleep
            )));
        }

        let mood = self.health.mood_scale;
        if !(MIN_MOOD..=MAX_MOOD).contains(&mood) {
            return Err(LifeosError::InvalidEntry(format!(
                "moodScale must be between {} and {} (got {})",
                MIN_MOOD, MAX_MOOD, mood
            )));
        }

        Ok(())
    }
}

fn check_amount(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LifeosError::InvalidEntry(format!(
            "{} must be zero or positive (got {})",
            field, value
        )))
    }
}
