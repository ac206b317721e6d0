//! Pillar registry: the five life domains scores are computed for

use crate::error::LifeosError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A life domain tracked by the daily log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pillar {
    /// Income, spending, and savings patterns
    Finance,
    /// Education and professional growth
    Career,
    /// Physical and mental wellbeing
    Health,
    /// Reflection and inner growth
    Spirituality,
    /// Personal interests and creativity
    Hobbies,
}

impl Pillar {
    /// All pillars in registry order
    pub const ALL: [Pillar; 5] = [
        Pillar::Finance,
        Pillar::Career,
        Pillar::Health,
        Pillar::Spirituality,
        Pillar::Hobbies,
    ];

    /// Identifier used in config files and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Pillar::Finance => "finance",
            Pillar::Career => "career",
            Pillar::Health => "health",
            Pillar::Spirituality => "spirituality",
            Pillar::Hobbies => "hobbies",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pillar::Finance => "Finance",
            Pillar::Career => "Career",
            Pillar::Health => "Health",
            Pillar::Spirituality => "Spirituality",
            Pillar::Hobbies => "Hobbies",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Pillar::Finance => "Income, spending, and savings patterns",
            Pillar::Career => "Education and professional growth",
            Pillar::Health => "Physical and mental wellbeing",
            Pillar::Spirituality => "Reflection and inner growth",
            Pillar::Hobbies => "Personal interests and creativity",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Pillar::Finance => "💰",
            Pillar::Career => "📈",
            Pillar::Health => "🧘",
            Pillar::Spirituality => "✨",
            Pillar::Hobbies => "🎨",
        }
    }

    /// Plain-language summary of what drives this pillar's score
    pub fn explanation(&self) -> &'static str {
        match self {
            Pillar::Finance => {
                "This score reflects your savings-to-spending ratio. \
                Higher savings relative to spending improves your score."
            }
            Pillar::Career => {
                "Calculated from study time and project work consistency. \
                Regular practice and project engagement boost this score."
            }
            Pillar::Health => {
                "Combines sleep quality, workout frequency, and mood tracking. \
                Balance across all three areas leads to the highest scores."
            }
            Pillar::Spirituality => {
                "Based on prayer/meditation consistency and reflection time. \
                Daily practice weighs more heavily than occasional long sessions."
            }
            Pillar::Hobbies => {
                "Measures time invested in personal interests and skill development. \
                Regular, focused practice drives improvement."
            }
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Pillar {
    type Err = LifeosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "finance" => Ok(Pillar::Finance),
            "career" => Ok(Pillar::Career),
            "health" => Ok(Pillar::Health),
            "spirituality" => Ok(Pillar::Spirituality),
            "hobbies" => Ok(Pillar::Hobbies),
            _ => Err(LifeosError::InvalidPillar(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let ids: Vec<&str> = Pillar::ALL.iter().map(|p| p.id()).collect();
        assert_eq!(
            ids,
            vec!["finance", "career", "health", "spirituality", "hobbies"]
        );
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(Pillar::from_str("health").unwrap(), Pillar::Health);
        assert_eq!(Pillar::from_str("HOBBIES").unwrap(), Pillar::Hobbies);
        assert_eq!(Pillar::from_str(" Career ").unwrap(), Pillar::Career);
    }

    #[test]
    fn test_from_str_invalid() {
        match Pillar::from_str("wealth") {
            Err(LifeosError::InvalidPillar(id)) => assert_eq!(id, "wealth"),
            other => panic!("Expected InvalidPillar, got {:?}", other),
        }
        assert!(Pillar::from_str("").is_err());
    }

    #[test]
    fn test_id_round_trips_through_from_str() {
        for pillar in Pillar::ALL {
            assert_eq!(Pillar::from_str(pillar.id()).unwrap(), pillar);
            assert_eq!(pillar.to_string(), pillar.id());
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Pillar::Spirituality).unwrap();
        assert_eq!(json, "\"spirituality\"");
        let parsed: Pillar = serde_json::from_str("\"finance\"").unwrap();
        assert_eq!(parsed, Pillar::Finance);
    }
}
