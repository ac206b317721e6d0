//! Dashboard use case: current scores across all pillars

use crate::domain::{Pillar, PillarOverview, PillarScore};
use crate::error::Result;
use crate::infrastructure::{Config, LogStore};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub overview: PillarOverview,
    /// Pillars to display, from config
    pub visible: Vec<Pillar>,
    pub logged_days: usize,
}

impl Dashboard {
    /// Current scores for the visible pillars, in registry order
    pub fn visible_scores(&self) -> Vec<&PillarScore> {
        self.overview
            .current
            .iter()
            .filter(|s| self.visible.contains(&s.pillar))
            .collect()
    }
}

pub struct DashboardService<S: LogStore> {
    store: S,
    config: Config,
}

impl<S: LogStore> DashboardService<S> {
    pub fn new(store: S, config: Config) -> Self {
        DashboardService { store, config }
    }

    pub fn execute(&self) -> Result<Dashboard> {
        let history = self.store.get_all()?;
        let overview = PillarOverview::from_history(history.entries());

        tracing::debug!(
            entries = history.len(),
            top = %overview.top,
            lowest = %overview.lowest,
            "Computed dashboard"
        );

        Ok(Dashboard {
            overview,
            visible: self.config.visible_pillars(),
            logged_days: history.len(),
        })
    }
}
