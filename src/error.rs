//! Error types for lifeos

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lifeos application
#[derive(Debug, Error)]
pub enum LifeosError {
    #[error("Not a lifeos directory: {0}")]
    NotLifeosDirectory(PathBuf),

    #[error("Invalid pillar: {0}")]
    InvalidPillar(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl LifeosError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LifeosError::NotLifeosDirectory(_) => 2,
            LifeosError::InvalidDate(_) => 3,
            LifeosError::InvalidPillar(_) => 4,
            LifeosError::InvalidEntry(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            LifeosError::NotLifeosDirectory(path) => {
                format!(
                    "Not a lifeos directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'lifeos init' in this directory to start logging\n\
                    • Navigate to an existing lifeos directory\n\
                    • Set LIFEOS_ROOT environment variable to your data path",
                    path.display()
                )
            }
            LifeosError::InvalidPillar(id) => {
                format!(
                    "Invalid pillar: '{}'\n\n\
                    Valid pillars: finance, career, health, spirituality, hobbies\n\
                    Example: lifeos pillar health",
                    id
                )
            }
            LifeosError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday\n\
                    • Weekday names: monday, tuesday, ... (most recent, today included)\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)\n\n\
                    Examples:\n\
                    lifeos log today --sleep 7.5\n\
                    lifeos show 2025-01-15",
                    input
                )
            }
            LifeosError::InvalidEntry(msg) => {
                format!(
                    "Invalid entry: {}\n\n\
                    Accepted ranges:\n\
                    • Amounts and minutes must be zero or positive\n\
                    • Sleep hours between 0 and 24\n\
                    • Mood between 1 and 5",
                    msg
                )
            }
            LifeosError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: lifeos config chart_days 14",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using LifeosError
pub type Result<T> = std::result::Result<T, LifeosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_lifeos_directory_suggestion() {
        let err = LifeosError::NotLifeosDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("lifeos init"));
        assert!(msg.contains("LIFEOS_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_pillar_lists_registry() {
        let err = LifeosError::InvalidPillar("wealth".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'wealth'"));
        assert!(msg.contains("finance, career, health, spirituality, hobbies"));
    }

    #[test]
    fn test_invalid_date_examples() {
        let err = LifeosError::InvalidDate("someday".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("today"));
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("Examples"));
    }

    #[test]
    fn test_invalid_entry_ranges() {
        let err = LifeosError::InvalidEntry("mood must be between 1 and 5".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("Mood between 1 and 5"));
        assert!(msg.contains("Sleep hours"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            LifeosError::NotLifeosDirectory(PathBuf::from(".")).exit_code(),
            2
        );
        assert_eq!(LifeosError::InvalidDate("x".into()).exit_code(), 3);
        assert_eq!(LifeosError::InvalidPillar("x".into()).exit_code(), 4);
        assert_eq!(LifeosError::InvalidEntry("x".into()).exit_code(), 5);
        assert_eq!(LifeosError::Config("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = LifeosError::Config("broken".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "broken");
    }
}
