//! Current scores, trend classification, and rolling score history

use crate::domain::history::without_trailing;
use crate::domain::score::{calculate_pillar_score, DEFAULT_WINDOW_DAYS};
use crate::domain::{DailyEntry, Pillar};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Score changes within this many points either way count as stable
pub const TREND_DEAD_BAND: i32 = 2;

/// Fixed window for each point of the score history series
pub const HISTORY_WINDOW_DAYS: usize = 7;

/// A history point is only emitted once this many entries exist up to it
pub const MIN_ENTRIES_FOR_HISTORY_POINT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn from_change(change: i32) -> Self {
        if change > TREND_DEAD_BAND {
            Trend::Up
        } else if change < -TREND_DEAD_BAND {
            Trend::Down
        } else {
            Trend::Stable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillarScore {
    pub pillar: Pillar,
    /// Rounded 0-100
    pub score: i32,
    pub trend: Trend,
    /// Current minus previous window, both rounded
    pub change: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreHistoryPoint {
    pub date: NaiveDate,
    pub score: i32,
}

fn rounded_score(history: &[DailyEntry], pillar: Pillar, window_days: usize) -> i32 {
    calculate_pillar_score(history, pillar, window_days).round() as i32
}

/// Score every pillar over the last 30 entries and compare with the 30 before.
pub fn get_pillar_scores(history: &[DailyEntry]) -> Vec<PillarScore> {
    let previous = without_trailing(history, DEFAULT_WINDOW_DAYS);

    Pillar::ALL
        .iter()
        .map(|&pillar| {
            let score = rounded_score(history, pillar, DEFAULT_WINDOW_DAYS);
            let change = score - rounded_score(previous, pillar, DEFAULT_WINDOW_DAYS);
            PillarScore {
                pillar,
                score,
                trend: Trend::from_change(change),
                change,
            }
        })
        .collect()
}

/// Rolling 7-day scores for the last `days + 1` positions in the history,
/// oldest first. Positions with fewer than seven entries up to them are skipped.
pub fn get_score_history(
    history: &[DailyEntry],
    pillar: Pillar,
    days: usize,
) -> Vec<ScoreHistoryPoint> {
    // Offsets past the start of the history can never yield a point
    (0..=days.min(history.len()))
        .rev()
        .filter_map(|offset| {
            let end = history.len().checked_sub(offset)?;
            if end < MIN_ENTRIES_FOR_HISTORY_POINT {
                return None;
            }
            let prefix = &history[..end];
            Some(ScoreHistoryPoint {
                date: prefix[end - 1].date,
                score: rounded_score(prefix, pillar, HISTORY_WINDOW_DAYS),
            })
        })
        .collect()
}

/// Dashboard summary of the current scores
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarOverview {
    pub current: Vec<PillarScore>,
    /// Scores as they stood 30 entries ago
    pub previous: Vec<PillarScore>,
    pub top: Pillar,
    pub lowest: Pillar,
    pub trending_up: Vec<Pillar>,
    pub trending_down: Vec<Pillar>,
}

impl PillarOverview {
    pub fn from_history(history: &[DailyEntry]) -> Self {
        let current = get_pillar_scores(history);
        let previous = get_pillar_scores(without_trailing(history, DEFAULT_WINDOW_DAYS));

        // Ties go to the pillar earliest in registry order
        let mut top = current[0];
        let mut lowest = current[0];
        for score in &current[1..] {
            if score.score > top.score {
                top = *score;
            }
            if score.score < lowest.score {
                lowest = *score;
            }
        }

        let with_trend = |trend: Trend| -> Vec<Pillar> {
            current
                .iter()
                .filter(|s| s.trend == trend)
                .map(|s| s.pillar)
                .collect()
        };

        PillarOverview {
            trending_up: with_trend(Trend::Up),
            trending_down: with_trend(Trend::Down),
            top: top.pillar,
            lowest: lowest.pillar,
            current,
            previous,
        }
    }

    pub fn score_for(&self, pillar: Pillar) -> Option<&PillarScore> {
        self.current.iter().find(|s| s.pillar == pillar)
    }

    pub fn previous_for(&self, pillar: Pillar) -> Option<&PillarScore> {
        self.previous.iter().find(|s| s.pillar == pillar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn days(n: usize, fill: impl Fn(usize, &mut DailyEntry)) -> Vec<DailyEntry> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        (0..n)
            .map(|i| {
                let mut entry = DailyEntry::new(start + Duration::days(i as i64));
                fill(i, &mut entry);
                entry
            })
            .collect()
    }

    fn steady_day(_: usize, e: &mut DailyEntry) {
        e.health.sleep_hours = 8.0;
        e.health.workout_done = true;
        e.health.mood_scale = 5;
        e.career.minutes_studied = 60.0;
        e.career.project_work = true;
        e.spirituality.prayer_done = true;
        e.spirituality.reflection_minutes = 20.0;
        e.finance.savings_added = 100.0;
        e.finance.money_spent = 50.0;
        e.hobbies.practice_minutes = 40.0;
        e.hobbies.technique_practiced = true;
    }

    #[test]
    fn test_trend_dead_band() {
        assert_eq!(Trend::from_change(0), Trend::Stable);
        assert_eq!(Trend::from_change(2), Trend::Stable);
        assert_eq!(Trend::from_change(-2), Trend::Stable);
        assert_eq!(Trend::from_change(3), Trend::Up);
        assert_eq!(Trend::from_change(-3), Trend::Down);
    }

    #[test]
    fn test_steady_sixty_days_is_stable() {
        let history = days(60, steady_day);
        let scores = get_pillar_scores(&history);

        assert_eq!(scores.len(), 5);
        let pillars: Vec<Pillar> = scores.iter().map(|s| s.pillar).collect();
        assert_eq!(pillars, Pillar::ALL.to_vec());

        let health = scores.iter().find(|s| s.pillar == Pillar::Health).unwrap();
        assert_eq!(health.score, 100);
        for score in &scores {
            assert_eq!(score.change, 0);
            assert_eq!(score.trend, Trend::Stable);
        }
    }

    #[test]
    fn test_short_history_compares_against_baseline() {
        let history = days(10, steady_day);
        let scores = get_pillar_scores(&history);

        // career: avg study 600/30 = 20 -> 13.33, project 10/30 -> 20; total 33
        let career = scores.iter().find(|s| s.pillar == Pillar::Career).unwrap();
        assert_eq!(career.score, 33);
        assert_eq!(career.change, 33);
        assert_eq!(career.trend, Trend::Up);
    }

    #[test]
    fn test_declining_pillar_trends_down() {
        let history = days(60, |i, e| {
            e.spirituality.prayer_done = i < 30;
        });
        let scores = get_pillar_scores(&history);
        let spirit = scores
            .iter()
            .find(|s| s.pillar == Pillar::Spirituality)
            .unwrap();
        assert_eq!(spirit.score, 0);
        assert_eq!(spirit.change, -60);
        assert_eq!(spirit.trend, Trend::Down);
    }

    #[test]
    fn test_trend_matches_change_for_all_pillars() {
        let history = days(50, |i, e| {
            e.career.minutes_studied = (i % 7) as f64 * 10.0;
            e.health.sleep_hours = 5.0 + (i % 4) as f64;
            e.hobbies.practice_minutes = if i > 25 { 40.0 } else { 5.0 };
        });
        for score in get_pillar_scores(&history) {
            assert_eq!(score.trend, Trend::from_change(score.change));
        }
    }

    #[test]
    fn test_score_history_full_length() {
        let history = days(60, steady_day);
        let points = get_score_history(&history, Pillar::Health, 30);

        assert_eq!(points.len(), 31);
        assert_eq!(points[0].date, history[29].date);
        assert_eq!(points[30].date, history[59].date);
        assert!(points.iter().all(|p| p.score == 100));
    }

    #[test]
    fn test_score_history_skips_short_prefixes() {
        let history = days(10, steady_day);
        let points = get_score_history(&history, Pillar::Career, 30);

        // Prefixes of length 7, 8, 9, 10
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].date, history[6].date);
        assert_eq!(points[3].date, history[9].date);
    }

    #[test]
    fn test_score_history_short_histories_empty() {
        let history = days(6, steady_day);
        assert!(get_score_history(&history, Pillar::Finance, 30).is_empty());
        assert!(get_score_history(&[], Pillar::Finance, 30).is_empty());
    }

    #[test]
    fn test_score_history_never_exceeds_days_plus_one() {
        let history = days(40, steady_day);
        for requested in [0, 1, 7, 14, 33, 100] {
            let points = get_score_history(&history, Pillar::Hobbies, requested);
            assert!(points.len() <= requested + 1);
        }
        assert_eq!(get_score_history(&history, Pillar::Hobbies, 0).len(), 1);
    }

    #[test]
    fn test_score_history_huge_span_is_bounded() {
        let history = days(10, steady_day);
        let points = get_score_history(&history, Pillar::Health, usize::MAX);

        assert_eq!(points, get_score_history(&history, Pillar::Health, 10));
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].date, history[6].date);
    }

    #[test]
    fn test_score_history_uses_seven_day_window() {
        let history = days(14, |i, e| e.health.workout_done = i >= 7);
        let points = get_score_history(&history, Pillar::Health, 7);

        // mood 3 -> 18, sleep 7/7.5 -> 32.67; workouts 0 on day 7, 7 on day 14
        assert_eq!(points.first().unwrap().score, 51);
        assert_eq!(points.last().unwrap().score, 86);
    }

    #[test]
    fn test_overview_top_and_lowest() {
        let history = days(30, steady_day);
        let overview = PillarOverview::from_history(&history);

        // finance 99, career 100, health 100, spirituality 100, hobbies 93
        assert_eq!(overview.score_for(Pillar::Finance).unwrap().score, 99);
        assert_eq!(overview.score_for(Pillar::Hobbies).unwrap().score, 93);
        assert_eq!(overview.top, Pillar::Career);
        assert_eq!(overview.lowest, Pillar::Hobbies);
        assert_eq!(overview.previous.len(), 5);
        assert_eq!(overview.previous_for(Pillar::Finance).unwrap().score, 40);
        assert_eq!(overview.trending_up.len(), 5);
        assert!(overview.trending_down.is_empty());
    }

    #[test]
    fn test_overview_ties_resolve_in_registry_order() {
        let overview = PillarOverview::from_history(&[]);
        assert_eq!(overview.top, Pillar::Finance);
        assert_eq!(overview.lowest, Pillar::Career);
    }
}
