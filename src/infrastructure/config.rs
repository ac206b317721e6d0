//! Configuration management

use crate::domain::score::DEFAULT_WINDOW_DAYS;
use crate::domain::Pillar;
use crate::error::{LifeosError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DATA_DIR: &str = ".lifeos";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub created: DateTime<Utc>,

    /// Number of days shown in score history charts
    #[serde(default = "default_chart_days")]
    pub chart_days: usize,

    /// Pillars left out of dashboard output. Scoring is unaffected.
    #[serde(default)]
    pub hidden_pillars: Vec<Pillar>,
}

fn default_chart_days() -> usize {
    DEFAULT_WINDOW_DAYS
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            created: Utc::now(),
            chart_days: default_chart_days(),
            hidden_pillars: Vec::new(),
        }
    }

    /// Load config from .lifeos/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DATA_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LifeosError::NotLifeosDirectory(path.to_path_buf())
            } else {
                LifeosError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| LifeosError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .lifeos/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(DATA_DIR);

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(data_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    pub fn is_visible(&self, pillar: Pillar) -> bool {
        !self.hidden_pillars.contains(&pillar)
    }

    /// Pillars shown on the dashboard, in registry order
    pub fn visible_pillars(&self) -> Vec<Pillar> {
        Pillar::ALL
            .into_iter()
            .filter(|p| self.is_visible(*p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert_eq!(config.chart_days, 30);
        assert!(config.hidden_pillars.is_empty());
        assert_eq!(config.visible_pillars().len(), 5);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.chart_days = 14;
        config.hidden_pillars = vec![Pillar::Hobbies];

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".lifeos").exists());
        assert!(temp.path().join(".lifeos/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            LifeosError::NotLifeosDirectory(_) => {}
            other => panic!("Expected NotLifeosDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".lifeos")).unwrap();
        fs::write(
            temp.path().join(".lifeos/config.toml"),
            "created = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.chart_days, 30);
        assert!(loaded.hidden_pillars.is_empty());
    }

    #[test]
    fn test_load_rejects_unknown_pillar() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".lifeos")).unwrap();
        fs::write(
            temp.path().join(".lifeos/config.toml"),
            "created = \"2025-01-17T10:00:00Z\"\nhidden_pillars = [\"wealth\"]\n",
        )
        .unwrap();

        match Config::load_from_dir(temp.path()) {
            Err(LifeosError::Config(msg)) => assert!(msg.contains("config.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".lifeos")).unwrap();
        fs::write(temp.path().join(".lifeos/config.toml"), "chart_days = [").unwrap();

        match Config::load_from_dir(temp.path()) {
            Err(LifeosError::Config(msg)) => {
                assert!(msg.starts_with("Failed to parse config.toml"))
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_visible_pillars_in_registry_order() {
        let mut config = Config::new();
        config.hidden_pillars = vec![Pillar::Health, Pillar::Finance];
        assert_eq!(
            config.visible_pillars(),
            vec![Pillar::Career, Pillar::Spirituality, Pillar::Hobbies]
        );
        assert!(!config.is_visible(Pillar::Health));
    }
}
