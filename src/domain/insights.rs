//! Rule-based observations over recent log data
//!
//! Each rule looks at the last 30 entries (or the last two weeks for mood)
//! and produces at most one insight. Rules are independent; none suppresses
//! another, and they are evaluated in table order.

use crate::domain::history::trailing;
use crate::domain::trend::{get_pillar_scores, PillarScore};
use crate::domain::{DailyEntry, Pillar};
use serde::Serialize;
use std::fmt;

/// Fewer entries than this produce no insights at all
pub const MIN_HISTORY_FOR_INSIGHTS: usize = 3;
pub const INSIGHT_WINDOW_DAYS: usize = 30;
pub const MOOD_WEEK_DAYS: usize = 7;

pub const LOW_SLEEP_HOURS: f64 = 6.0;
pub const MIN_LOW_SLEEP_DAYS: usize = 3;
pub const LOW_SLEEP_HEALTH_CEILING: i32 = 60;

pub const STUDY_CONSISTENT_DAYS: usize = 20;
pub const STUDY_SPARSE_DAYS: usize = 10;
pub const MIN_ENTRIES_STUDY_SPARSE: usize = 10;

pub const SAVINGS_TO_SPENDING_RATIO: f64 = 0.2;

pub const MOOD_SHIFT_THRESHOLD: f64 = 0.5;

pub const MIN_ENTRIES_SPIRITUAL: usize = 10;
pub const PRAYER_RATE_THRESHOLD: f64 = 0.7;

pub const MIN_ENTRIES_HOBBY: usize = 10;
pub const HOBBY_ACTIVE_DAYS: usize = 15;
pub const HOBBY_SESSION_MINUTES: f64 = 30.0;

pub const MIN_ENTRIES_CROSS_PILLAR: usize = 15;
pub const CROSS_PILLAR_DAYS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Positive,
    Negative,
    Neutral,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Positive => "positive",
            Severity::Negative => "negative",
            Severity::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    /// None for cross-pillar observations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pillar: Option<Pillar>,
}

impl Insight {
    fn new(
        title: &str,
        description: String,
        severity: Severity,
        pillar: Option<Pillar>,
    ) -> Self {
        Insight {
            title: title.to_string(),
            description,
            severity,
            pillar,
        }
    }
}

/// Inputs shared by every rule
struct RuleContext<'a> {
    month: &'a [DailyEntry],
    /// Last seven entries and the seven before them, when both are complete
    weeks: Option<(&'a [DailyEntry], &'a [DailyEntry])>,
    scores: &'a [PillarScore],
}

impl RuleContext<'_> {
    fn count(&self, flag: impl Fn(&DailyEntry) -> bool) -> usize {
        self.month.iter().filter(|e| flag(e)).count()
    }

    fn total(&self, field: impl Fn(&DailyEntry) -> f64) -> f64 {
        self.month.iter().map(field).sum()
    }

    fn score(&self, pillar: Pillar) -> i32 {
        self.scores
            .iter()
            .find(|s| s.pillar == pillar)
            .map_or(0, |s| s.score)
    }
}

type Rule = fn(&RuleContext<'_>) -> Option<Insight>;

const RULES: [Rule; 7] = [
    low_sleep_rule,
    study_consistency_rule,
    savings_ratio_rule,
    mood_shift_rule,
    spiritual_consistency_rule,
    hobby_engagement_rule,
    exercise_productivity_rule,
];

/// Run every rule against the history, in order.
pub fn generate_insights(history: &[DailyEntry]) -> Vec<Insight> {
    if history.len() < MIN_HISTORY_FOR_INSIGHTS {
        return Vec::new();
    }

    let scores = get_pillar_scores(history);
    let weeks = if history.len() >= MOOD_WEEK_DAYS * 2 {
        let split = history.len() - MOOD_WEEK_DAYS;
        Some((
            &history[split..],
            &history[split - MOOD_WEEK_DAYS..split],
        ))
    } else {
        None
    };

    let ctx = RuleContext {
        month: trailing(history, INSIGHT_WINDOW_DAYS),
        weeks,
        scores: &scores,
    };

    RULES.iter().filter_map(|rule| rule(&ctx)).collect()
}

fn low_sleep_rule(ctx: &RuleContext<'_>) -> Option<Insight> {
    let low_sleep_days = ctx.count(|e| e.health.sleep_hours < LOW_SLEEP_HOURS);
    if low_sleep_days < MIN_LOW_SLEEP_DAYS || ctx.score(Pillar::Health) >= LOW_SLEEP_HEALTH_CEILING
    {
        return None;
    }

    Some(Insight::new(
        "Sleep Pattern Correlation",
        format!(
            "Your health score tends to drop when sleep falls below 6 hours. \
            You've had {} such days in the past month.",
            low_sleep_days
        ),
        Severity::Negative,
        Some(Pillar::Health),
    ))
}

fn study_consistency_rule(ctx: &RuleContext<'_>) -> Option<Insight> {
    let study_days = ctx.count(|e| e.career.minutes_studied > 0.0);

    if study_days >= STUDY_CONSISTENT_DAYS {
        Some(Insight::new(
            "Study Consistency",
            format!(
                "You've studied on {} out of {} days. This regular engagement \
                is the primary driver of your career score.",
                study_days,
                ctx.month.len()
            ),
            Severity::Positive,
            Some(Pillar::Career),
        ))
    } else if study_days < STUDY_SPARSE_DAYS && ctx.month.len() >= MIN_ENTRIES_STUDY_SPARSE {
        Some(Insight::new(
            "Study Frequency",
            format!(
                "Study sessions logged on only {} days this month. Increasing \
                frequency, even with shorter sessions, may improve your career trajectory.",
                study_days
            ),
            Severity::Negative,
            Some(Pillar::Career),
        ))
    } else {
        None
    }
}

fn savings_ratio_rule(ctx: &RuleContext<'_>) -> Option<Insight> {
    let total_saved = ctx.total(|e| e.finance.savings_added);
    let total_spent = ctx.total(|e| e.finance.money_spent);

    if total_saved <= 0.0 || total_saved <= total_spent * SAVINGS_TO_SPENDING_RATIO {
        return None;
    }

    let description = if total_spent > 0.0 {
        format!(
            "You saved {}% of what you spent this month ({:.0} saved against {:.0} spent). \
            This healthy ratio contributes strongly to your finance score.",
            (total_saved / total_spent * 100.0).round(),
            total_saved,
            total_spent
        )
    } else {
        format!(
            "You saved {:.0} this month with no recorded spending. \
            This contributes strongly to your finance score.",
            total_saved
        )
    };

    Some(Insight::new(
        "Positive Savings Ratio",
        description,
        Severity::Positive,
        Some(Pillar::Finance),
    ))
}

fn mood_shift_rule(ctx: &RuleContext<'_>) -> Option<Insight> {
    let (this_week, last_week) = ctx.weeks?;
    let average = |week: &[DailyEntry]| {
        week.iter()
            .map(|e| f64::from(e.health.mood_scale))
            .sum::<f64>()
            / MOOD_WEEK_DAYS as f64
    };
    let current = average(this_week);
    let previous = average(last_week);

    if current > previous + MOOD_SHIFT_THRESHOLD {
        Some(Insight::new(
            "Mood Improvement",
            format!(
                "Your average mood this week ({:.1}/5) is higher than last week ({:.1}/5). \
                Review what changed.",
                current, previous
            ),
            Severity::Positive,
            Some(Pillar::Health),
        ))
    } else if current < previous - MOOD_SHIFT_THRESHOLD {
        Some(Insight::new(
            "Mood Shift",
            format!(
                "Your average mood declined from {:.1} to {:.1} this week. \
                Consider what factors may have contributed.",
                previous, current
            ),
            Severity::Neutral,
            Some(Pillar::Health),
        ))
    } else {
        None
    }
}

fn spiritual_consistency_rule(ctx: &RuleContext<'_>) -> Option<Insight> {
    if ctx.month.len() < MIN_ENTRIES_SPIRITUAL {
        return None;
    }

    let prayer_rate = ctx.count(|e| e.spirituality.prayer_done) as f64 / ctx.month.len() as f64;
    if prayer_rate < PRAYER_RATE_THRESHOLD {
        return None;
    }

    Some(Insight::new(
        "Spiritual Consistency",
        format!(
            "Prayer/meditation maintained on {}% of days. This consistency is \
            the foundation of your spirituality score.",
            (prayer_rate * 100.0).round()
        ),
        Severity::Positive,
        Some(Pillar::Spirituality),
    ))
}

fn hobby_engagement_rule(ctx: &RuleContext<'_>) -> Option<Insight> {
    if ctx.month.len() < MIN_ENTRIES_HOBBY {
        return None;
    }

    let hobby_days = ctx.count(|e| e.hobbies.practice_minutes > 0.0);
    if hobby_days < HOBBY_ACTIVE_DAYS {
        return None;
    }

    let avg_session = ctx.total(|e| e.hobbies.practice_minutes) / hobby_days as f64;
    if avg_session < HOBBY_SESSION_MINUTES {
        return None;
    }

    Some(Insight::new(
        "Active Hobby Practice",
        format!(
            "Averaging {} minutes per session across {} days shows meaningful \
            engagement with your interests.",
            avg_session.round(),
            hobby_days
        ),
        Severity::Positive,
        Some(Pillar::Hobbies),
    ))
}

fn exercise_productivity_rule(ctx: &RuleContext<'_>) -> Option<Insight> {
    if ctx.month.len() < MIN_ENTRIES_CROSS_PILLAR {
        return None;
    }

    let workout_days = ctx.count(|e| e.health.workout_done);
    let project_days = ctx.count(|e| e.career.project_work);
    if workout_days < CROSS_PILLAR_DAYS || project_days < CROSS_PILLAR_DAYS {
        return None;
    }

    Some(Insight::new(
        "Exercise-Productivity Link",
        format!(
            "Days with workouts often correlate with productive career days. \
            You worked out on {} days and did project work on {} days this month.",
            workout_days, project_days
        ),
        Severity::Positive,
        None,
    ))
}
