//! Config management use case

use crate::domain::Pillar;
use crate::error::{LifeosError, Result};
use crate::infrastructure::{Config, Workspace};
use std::str::FromStr;

pub const CONFIG_KEYS: &str = "chart_days, hidden_pillars, created";

/// Service for managing configuration
pub struct ConfigService<W: Workspace> {
    workspace: W,
}

impl<W: Workspace> ConfigService<W> {
    pub fn new(workspace: W) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "chart_days" => Ok(config.chart_days.to_string()),
            "hidden_pillars" => Ok(format_pillars(&config.hidden_pillars)),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "chart_days" => {
                config.chart_days = value
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|days| *days > 0)
                    .ok_or_else(|| {
                        LifeosError::Config(format!(
                            "chart_days must be a positive whole number (got '{}')",
                            value
                        ))
                    })?;
            }
            "hidden_pillars" => {
                config.hidden_pillars = parse_pillars(value)?;
            }
            "created" => {
                return Err(LifeosError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => return Err(unknown_key(key)),
        }

        self.workspace.save_config(&config)?;
        tracing::info!(key, value, "Updated config");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}

fn unknown_key(key: &str) -> LifeosError {
    LifeosError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, CONFIG_KEYS
    ))
}

/// Comma-separated pillar ids, or `none`
pub fn format_pillars(pillars: &[Pillar]) -> String {
    if pillars.is_empty() {
        return "none".to_string();
    }
    pillars
        .iter()
        .map(|p| p.id())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse a comma-separated list of pillar ids; empty or `none` clears the list.
/// Duplicates collapse and the result is in registry order.
pub fn parse_pillars(value: &str) -> Result<Vec<Pillar>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Ok(Vec::new());
    }

    let mut pillars = trimmed
        .split(',')
        .map(Pillar::from_str)
        .collect::<Result<Vec<_>>>()?;
    pillars.sort();
    pillars.dedup();
    Ok(pillars)
}
