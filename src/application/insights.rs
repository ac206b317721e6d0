//! Insights use case: rule-based observations plus a weekly summary

use crate::domain::{generate_insights, Insight, WeeklySummary};
use crate::error::Result;
use crate::infrastructure::LogStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsReport {
    pub insights: Vec<Insight>,
    pub weekly: WeeklySummary,
    pub logged_days: usize,
}

pub struct InsightsService<S: LogStore> {
    store: S,
}

impl<S: LogStore> InsightsService<S> {
    pub fn new(store: S) -> Self {
        InsightsService { store }
    }

    pub fn execute(&self) -> Result<InsightsReport> {
        let history = self.store.get_all()?;
        let insights = generate_insights(history.entries());

        tracing::debug!(
            entries = history.len(),
            insights = insights.len(),
            "Generated insights"
        );

        Ok(InsightsReport {
            weekly: WeeklySummary::from_history(history.entries()),
            logged_days: history.len(),
            insights,
        })
    }
}
