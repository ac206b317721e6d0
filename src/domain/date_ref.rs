//! Date references accepted on the command line

use crate::error::{LifeosError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date as the user typed it, resolved against "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRef {
    Today,
    Yesterday,
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    Specific(NaiveDate),
}

impl DateRef {
    /// Parse `today`, `yesterday`, a weekday name, or an ISO `YYYY-MM-DD` date
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DateRef::Today),
            "yesterday" => Ok(DateRef::Yesterday),
            _ => {
                if let Ok(weekday) = normalized.parse::<Weekday>() {
                    return Ok(DateRef::Weekday(weekday));
                }
                NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                    .map(DateRef::Specific)
                    .map_err(|_| LifeosError::InvalidDate(input.to_string()))
            }
        }
    }

    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateRef::Today => today,
            DateRef::Yesterday => today - Duration::days(1),
            DateRef::Weekday(target) => {
                let days_back = (today.weekday().num_days_from_monday() + 7
                    - target.num_days_from_monday())
                    % 7;
                today - Duration::days(i64::from(days_back))
            }
            DateRef::Specific(date) => *date,
        }
    }
}
