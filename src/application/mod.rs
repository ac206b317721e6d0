//! Application layer - Use cases and orchestration

pub mod dashboard;
pub mod data;
pub mod init;
pub mod insights;
pub mod log_entry;
pub mod manage_config;
pub mod pillar_detail;

pub use dashboard::{Dashboard, DashboardService};
pub use data::{DataService, ImportSummary};
pub use insights::{InsightsReport, InsightsService};
pub use log_entry::{EntryUpdate, LogEntryService, Recorded};
pub use manage_config::ConfigService;
pub use pillar_detail::{PillarDetail, PillarDetailService};
