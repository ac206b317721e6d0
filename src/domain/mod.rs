//! Domain layer - Pure scoring and insight logic

pub mod date_ref;
pub mod entry;
pub mod history;
pub mod insights;
pub mod pillar;
pub mod score;
pub mod stats;
pub mod trend;

pub use date_ref::DateRef;
pub use entry::DailyEntry;
pub use history::LogHistory;
pub use insights::{generate_insights, Insight, Severity};
pub use pillar::Pillar;
pub use score::calculate_pillar_score;
pub use stats::{PillarBreakdown, WeeklySummary};
pub use trend::{
    get_pillar_scores, get_score_history, PillarOverview, PillarScore, ScoreHistoryPoint, Trend,
};
