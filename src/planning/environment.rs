//! Installation environment of the wall.
//!
//! The environment only selects the per-cabinet power figures; outdoor
//! cabinets run at much higher brightness and draw roughly twice the power.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Where the wall is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Indoor installation.
    #[default]
    Indoor,

    /// Outdoor installation (high-brightness cabinets).
    Outdoor,
}

impl Environment {
    /// Parses an environment from a string.
    ///
    /// Accepts: "indoor", "in", "outdoor", "out" (case-insensitive).
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "indoor" | "in" => Some(Self::Indoor),
            "outdoor" | "out" => Some(Self::Outdoor),
            _ => None,
        }
    }

    /// Returns the lowercase name used in configuration and output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Indoor => "indoor",
            Self::Outdoor => "outdoor",
        }
    }
}

impl FromStr for Environment {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| PlanError::UnknownEnvironment {
            value: s.to_string(),
        })
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_from_string() {
        assert_eq!(Environment::from_str_loose("indoor"), Some(Environment::Indoor));
        assert_eq!(Environment::from_str_loose("INDOOR"), Some(Environment::Indoor));
        assert_eq!(Environment::from_str_loose("out"), Some(Environment::Outdoor));
        assert_eq!(Environment::from_str_loose(" Outdoor "), Some(Environment::Outdoor));
        assert_eq!(Environment::from_str_loose("underwater"), None);
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let err = "rooftop".parse::<Environment>().unwrap_err();
        assert_eq!(
            err,
            PlanError::UnknownEnvironment {
                value: "rooftop".to_string()
            }
        );
    }

    #[test]
    fn display_round_trips() {
        for env in [Environment::Indoor, Environment::Outdoor] {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&Environment::Outdoor).unwrap();
        assert_eq!(json, "\"outdoor\"");
    }
}
