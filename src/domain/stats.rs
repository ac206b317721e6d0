//! Raw-metric summaries shown alongside scores

use crate::domain::history::trailing;
use crate::domain::score::DEFAULT_WINDOW_DAYS;
use crate::domain::{DailyEntry, Pillar};
use serde::Serialize;

pub const WEEK_DAYS: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

impl Metric {
    fn new(label: &'static str, value: String) -> Self {
        Metric { label, value }
    }
}

/// Thirty-day raw figures behind one pillar's score.
/// Averages and rates divide by the full 30 days, like the score itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarBreakdown {
    pub pillar: Pillar,
    pub metrics: Vec<Metric>,
    pub explanation: &'static str,
}

impl PillarBreakdown {
    pub fn from_history(history: &[DailyEntry], pillar: Pillar) -> Self {
        let month = trailing(history, DEFAULT_WINDOW_DAYS);
        let days = DEFAULT_WINDOW_DAYS as f64;
        let sum = |field: fn(&DailyEntry) -> f64| -> f64 { month.iter().map(field).sum() };
        let count =
            |flag: fn(&DailyEntry) -> bool| -> usize { month.iter().filter(|e| flag(e)).count() };
        let percent = |n: usize| format!("{}%", (n as f64 / days * 100.0).round());

        let metrics = match pillar {
            Pillar::Finance => {
                let spent = sum(|e| e.finance.money_spent);
                vec![
                    Metric::new("Total Income", money(sum(|e| e.finance.income_added))),
                    Metric::new("Total Spent", money(spent)),
                    Metric::new("Total Saved", money(sum(|e| e.finance.savings_added))),
                    Metric::new("Avg Daily Spend", money(spent / days)),
                ]
            }
            Pillar::Career => {
                let studied = sum(|e| e.career.minutes_studied);
                let skills: u32 = month.iter().map(|e| e.career.skills_practiced).sum();
                vec![
                    Metric::new("Total Study Time", format!("{:.0} min", studied)),
                    Metric::new("Skills Practiced", format!("{} total", skills)),
                    Metric::new(
                        "Project Days",
                        format!("{} days", count(|e| e.career.project_work)),
                    ),
                    Metric::new("Avg Daily Study", format!("{:.0} min", (studied / days).round())),
                ]
            }
            Pillar::Health => {
                let workouts = count(|e| e.health.workout_done);
                vec![
                    Metric::new(
                        "Avg Sleep",
                        format!("{:.1} hrs", sum(|e| e.health.sleep_hours) / days),
                    ),
                    Metric::new("Workout Days", format!("{} days", workouts)),
                    Metric::new(
                        "Avg Mood",
                        format!("{:.1}/5", sum(|e| f64::from(e.health.mood_scale)) / days),
                    ),
                    Metric::new("Workout Rate", percent(workouts)),
                ]
            }
            Pillar::Spirituality => {
                let prayers = count(|e| e.spirituality.prayer_done);
                let reflection = sum(|e| e.spirituality.reflection_minutes);
                vec![
                    Metric::new("Prayer Days", format!("{} days", prayers)),
                    Metric::new("Total Reflection", format!("{:.0} min", reflection)),
                    Metric::new("Consistency", percent(prayers)),
                    Metric::new(
                        "Avg Reflection",
                        format!("{:.0} min", (reflection / days).round()),
                    ),
                ]
            }
            Pillar::Hobbies => {
                let practice = sum(|e| e.hobbies.practice_minutes);
                vec![
                    Metric::new("Total Practice", format!("{:.0} min", practice)),
                    Metric::new(
                        "Technique Days",
                        format!("{} days", count(|e| e.hobbies.technique_practiced)),
                    ),
                    Metric::new(
                        "Avg Daily Practice",
                        format!("{:.0} min", (practice / days).round()),
                    ),
                    Metric::new(
                        "Engagement Rate",
                        percent(count(|e| e.hobbies.practice_minutes > 0.0)),
                    ),
                ]
            }
        };

        PillarBreakdown {
            pillar,
            metrics,
            explanation: pillar.explanation(),
        }
    }
}

/// Whole-currency amount with thousands separators, e.g. `$12,345`
fn money(amount: f64) -> String {
    let whole = format!("{:.0}", amount.round());
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole.as_str()),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}", sign, grouped)
}

/// "This week at a glance" figures over the last seven entries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub avg_sleep_hours: f64,
    pub workout_days: usize,
    pub study_minutes: f64,
    pub reflection_minutes: f64,
}

impl WeeklySummary {
    pub fn from_history(history: &[DailyEntry]) -> Self {
        let week = trailing(history, WEEK_DAYS);
        WeeklySummary {
            avg_sleep_hours: week.iter().map(|e| e.health.sleep_hours).sum::<f64>()
                / WEEK_DAYS as f64,
            workout_days: week.iter().filter(|e| e.health.workout_done).count(),
            study_minutes: week.iter().map(|e| e.career.minutes_studied).sum(),
            reflection_minutes: week.iter().map(|e| e.spirituality.reflection_minutes).sum(),
        }
    }
}
