//! Pillar score calculation
//!
//! Every average and rate divides by the nominal window length, even when the
//! history holds fewer entries. Short histories therefore score low rather than
//! being inflated by a handful of good days.

use crate::domain::history::trailing;
use crate::domain::{DailyEntry, Pillar};

/// Window used for the headline score and trend comparison
pub const DEFAULT_WINDOW_DAYS: usize = 30;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

// Finance
const SAVINGS_RATIO_WEIGHT: f64 = 30.0;
const FINANCE_BASELINE: f64 = 40.0;

// Career
const STUDY_TARGET_MINUTES: f64 = 60.0;
const STUDY_WEIGHT: f64 = 40.0;
const PROJECT_WEIGHT: f64 = 60.0;

// Health
const SLEEP_TARGET_HOURS: f64 = 7.5;
const SLEEP_WEIGHT: f64 = 35.0;
const WORKOUT_WEIGHT: f64 = 35.0;
const MOOD_WEIGHT: f64 = 30.0;
const MOOD_MAX: f64 = 5.0;

// Spirituality
const PRAYER_WEIGHT: f64 = 60.0;
const REFLECTION_POINTS_PER_MINUTE: f64 = 2.0;
const REFLECTION_CAP: f64 = 40.0;

// Hobbies
const PRACTICE_TARGET_MINUTES: f64 = 45.0;
const PRACTICE_WEIGHT: f64 = 60.0;
const TECHNIQUE_WEIGHT: f64 = 40.0;

/// Sums and day counts over a window, averaged against a fixed denominator
struct Window<'a> {
    entries: &'a [DailyEntry],
    denominator: f64,
}

impl<'a> Window<'a> {
    fn new(history: &'a [DailyEntry], window_days: usize) -> Self {
        Window {
            entries: trailing(history, window_days),
            denominator: window_days.max(1) as f64,
        }
    }

    fn average(&self, field: impl Fn(&DailyEntry) -> f64) -> f64 {
        self.entries.iter().map(field).sum::<f64>() / self.denominator
    }

    fn rate(&self, flag: impl Fn(&DailyEntry) -> bool) -> f64 {
        self.entries.iter().filter(|e| flag(e)).count() as f64 / self.denominator
    }
}

/// Score one pillar over the trailing `window_days` entries of `history`.
///
/// The result is clamped to `[0, 100]` but not rounded. A zero window scores
/// like an empty one.
pub fn calculate_pillar_score(history: &[DailyEntry], pillar: Pillar, window_days: usize) -> f64 {
    let window = Window::new(history, window_days);

    let raw = match pillar {
        Pillar::Finance => {
            let avg_savings = window.average(|e| e.finance.savings_added);
            let avg_spending = window.average(|e| e.finance.money_spent);
            let ratio = avg_savings / (avg_spending + 1.0);
            ratio * SAVINGS_RATIO_WEIGHT + FINANCE_BASELINE
        }
        Pillar::Career => {
            let avg_study = window.average(|e| e.career.minutes_studied);
            let project_rate = window.rate(|e| e.career.project_work);
            (avg_study / STUDY_TARGET_MINUTES) * STUDY_WEIGHT + project_rate * PROJECT_WEIGHT
        }
        Pillar::Health => {
            let avg_sleep = window.average(|e| e.health.sleep_hours);
            let workout_rate = window.rate(|e| e.health.workout_done);
            let avg_mood = window.average(|e| f64::from(e.health.mood_scale));

            let sleep = (avg_sleep / SLEEP_TARGET_HOURS).min(1.0) * SLEEP_WEIGHT;
            let workout = workout_rate * WORKOUT_WEIGHT;
            let mood = (avg_mood / MOOD_MAX) * MOOD_WEIGHT;
            sleep + workout + mood
        }
        Pillar::Spirituality => {
            let prayer_rate = window.rate(|e| e.spirituality.prayer_done);
            let avg_reflection = window.average(|e| e.spirituality.reflection_minutes);
            prayer_rate * PRAYER_WEIGHT
                + (avg_reflection * REFLECTION_POINTS_PER_MINUTE).min(REFLECTION_CAP)
        }
        Pillar::Hobbies => {
            let avg_practice = window.average(|e| e.hobbies.practice_minutes);
            let technique_rate = window.rate(|e| e.hobbies.technique_practiced);
            (avg_practice / PRACTICE_TARGET_MINUTES) * PRACTICE_WEIGHT
                + technique_rate * TECHNIQUE_WEIGHT
        }
    };

    raw.clamp(MIN_SCORE, MAX_SCORE)
}
