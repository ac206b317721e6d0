//! Output formatting utilities

use crate::application::manage_config::format_pillars;
use crate::application::{Dashboard, InsightsReport, PillarDetail};
use crate::domain::trend::MIN_ENTRIES_FOR_HISTORY_POINT;
use crate::domain::{DailyEntry, Pillar, PillarScore, Severity};
use crate::infrastructure::Config;
use std::fmt::Write;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn trend_label(score: &PillarScore) -> String {
    format!("{} {:+}", score.trend, score.change)
}

/// Format a day's entry for display
pub fn format_entry(entry: &DailyEntry) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", entry.date.format("%Y-%m-%d"));
    let _ = writeln!(
        output,
        "  Finance       income {}  spent {}  saved {}",
        entry.finance.income_added, entry.finance.money_spent, entry.finance.savings_added
    );
    let _ = writeln!(
        output,
        "  Career        studied {} min  skills {}  project {}",
        entry.career.minutes_studied,
        entry.career.skills_practiced,
        yes_no(entry.career.project_work)
    );
    let _ = writeln!(
        output,
        "  Health        sleep {} hrs  workout {}  mood {}/5",
        entry.health.sleep_hours,
        yes_no(entry.health.workout_done),
        entry.health.mood_scale
    );
    let _ = writeln!(
        output,
        "  Spirituality  prayer {}  reflection {} min",
        yes_no(entry.spirituality.prayer_done),
        entry.spirituality.reflection_minutes
    );
    let _ = writeln!(
        output,
        "  Hobbies       practice {} min  technique {}",
        entry.hobbies.practice_minutes,
        yes_no(entry.hobbies.technique_practiced)
    );
    output
}

/// Format the dashboard; `compare` adds the previous-period score column
pub fn format_dashboard(dashboard: &Dashboard, compare: bool) -> String {
    let overview = &dashboard.overview;
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Life overview ({} days logged)\n",
        dashboard.logged_days
    );

    for score in dashboard.visible_scores() {
        let pillar = score.pillar;
        let _ = write!(
            output,
            "  {} {:<13} {:>3}  {}",
            pillar.icon(),
            pillar.name(),
            score.score,
            trend_label(score)
        );
        if compare {
            if let Some(previous) = overview.previous_for(pillar) {
                let _ = write!(output, "  (previous {})", previous.score);
            }
        }
        output.push('\n');
    }

    let _ = writeln!(
        output,
        "\nStrongest: {}\nNeeds attention: {}",
        overview.top.name(),
        overview.lowest.name()
    );

    let names = |pillars: &[Pillar]| -> String {
        pillars
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    };
    if !overview.trending_up.is_empty() {
        let _ = writeln!(output, "Trending up: {}", names(&overview.trending_up));
    }
    if !overview.trending_down.is_empty() {
        let _ = writeln!(output, "Trending down: {}", names(&overview.trending_down));
    }

    output
}

/// Format the detail view for one pillar
pub fn format_pillar_detail(detail: &PillarDetail) -> String {
    let pillar = detail.pillar;
    let mut output = String::new();
    let _ = writeln!(
        output,
        "{} {}: {} ({})",
        pillar.icon(),
        pillar.name(),
        detail.score.score,
        trend_label(&detail.score)
    );
    let _ = writeln!(output, "{}\n", pillar.description());

    let _ = writeln!(output, "Last 30 days");
    for metric in &detail.breakdown.metrics {
        let _ = writeln!(output, "  {:<20} {}", metric.label, metric.value);
    }
    let _ = writeln!(output, "\n{}\n", detail.breakdown.explanation);

    let _ = writeln!(output, "Score history (7-day rolling)");
    if detail.history.is_empty() {
        let _ = writeln!(
            output,
            "  Not enough data yet (needs {} logged days)",
            MIN_ENTRIES_FOR_HISTORY_POINT
        );
    } else {
        for point in &detail.history {
            let _ = writeln!(output, "  {}  {:>3}", point.date.format("%Y-%m-%d"), point.score);
        }
    }

    output
}

/// Format the weekly summary and observations
pub fn format_insights(report: &InsightsReport) -> String {
    let weekly = &report.weekly;
    let mut output = String::new();
    let _ = writeln!(output, "This week at a glance");
    let _ = writeln!(output, "  Avg sleep    {:.1} hrs", weekly.avg_sleep_hours);
    let _ = writeln!(output, "  Workouts     {} days", weekly.workout_days);
    let _ = writeln!(output, "  Study time   {:.0} min", weekly.study_minutes);
    let _ = writeln!(output, "  Reflection   {:.0} min", weekly.reflection_minutes);

    let _ = writeln!(output, "\nObservations");
    if report.insights.is_empty() {
        let _ = writeln!(
            output,
            "  Continue logging data to generate meaningful insights."
        );
        return output;
    }

    for insight in &report.insights {
        let marker = match insight.severity {
            Severity::Positive => "+",
            Severity::Negative => "-",
            Severity::Neutral => "~",
        };
        match insight.pillar {
            Some(pillar) => {
                let _ = writeln!(output, "  [{}] {} ({})", marker, insight.title, pillar.name());
            }
            None => {
                let _ = writeln!(output, "  [{}] {}", marker, insight.title);
            }
        }
        let _ = writeln!(output, "      {}", insight.description);
    }

    output
}

/// Format all config values, one `key = value` per line
pub fn format_config(config: &Config) -> String {
    format!(
        "chart_days = {}\nhidden_pillars = {}\ncreated = {}\n",
        config.chart_days,
        format_pillars(&config.hidden_pillars),
        config.created.to_rfc3339()
    )
}
