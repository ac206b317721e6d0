//! Pillar detail use case: score, trend chart, and raw metrics for one pillar

use crate::domain::{
    get_pillar_scores, get_score_history, Pillar, PillarBreakdown, PillarScore,
    ScoreHistoryPoint,
};
use crate::error::{LifeosError, Result};
use crate::infrastructure::{Config, LogStore};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarDetail {
    pub pillar: Pillar,
    pub score: PillarScore,
    pub history: Vec<ScoreHistoryPoint>,
    pub breakdown: PillarBreakdown,
}

pub struct PillarDetailService<S: LogStore> {
    store: S,
    config: Config,
}

impl<S: LogStore> PillarDetailService<S> {
    pub fn new(store: S, config: Config) -> Self {
        PillarDetailService { store, config }
    }

    /// Build the detail view for a pillar identifier.
    /// `days` overrides the configured chart span.
    pub fn execute(&self, pillar_id: &str, days: Option<usize>) -> Result<PillarDetail> {
        let pillar = Pillar::from_str(pillar_id)?;
        let history = self.store.get_all()?;
        let entries = history.entries();
        let days = days.unwrap_or(self.config.chart_days);

        let score = get_pillar_scores(entries)
            .into_iter()
            .find(|s| s.pillar == pillar)
            .ok_or_else(|| LifeosError::InvalidPillar(pillar_id.to_string()))?;
        let points = get_score_history(entries, pillar, days);

        tracing::debug!(%pillar, days, points = points.len(), "Computed pillar detail");

        Ok(PillarDetail {
            pillar,
            score,
            history: points,
            breakdown: PillarBreakdown::from_history(entries, pillar),
        })
    }
}
