use super::Player;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Roster plus tactical dials for one side of a match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamConfig {
    pub name: String,
    pub players: Vec<Player>,
    #[serde(default)]
    pub tactics: Tactics,
}

impl TeamConfig {
    pub fn new(name: impl Into<String>, players: Vec<Player>, tactics: Tactics) -> Self {
        Self { name: name.into(), players, tactics }
    }

    /// Roster must be non-empty, ids unique, every player in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::InvalidRoster {
                team: self.name.clone(),
                reason: "roster must contain at least one player".to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(self.players.len());
        for player in &self.players {
            if !seen.insert(player.id.as_str()) {
                return Err(ConfigError::InvalidRoster {
                    team: self.name.clone(),
                    reason: format!("duplicate player id '{}'", player.id),
                });
            }
            player.validate()?;
        }

        Ok(())
    }
}

/// Team-level dials that bias the engine's random choices.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Tactics {
    #[serde(default)]
    pub pace: Pace,
    #[serde(default)]
    pub spacing: Spacing,
    #[serde(default)]
    pub defense: DefenseScheme,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Fast,
    #[default]
    Normal,
    Slow,
}

impl Pace {
    /// Mean possession length in seconds for the pace-based clock.
    pub fn mean_possession_secs(&self) -> f64 {
        match self {
            Pace::Fast => 16.0,
            Pace::Normal => 20.0,
            Pace::Slow => 26.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Outside,
    #[default]
    Balanced,
    Inside,
}

impl Spacing {
    /// Multiplier applied to the shooter's three-point weight.
    pub fn three_point_multiplier(&self) -> f64 {
        match self {
            Spacing::Outside => 1.5,
            Spacing::Balanced => 1.0,
            Spacing::Inside => 0.7,
        }
    }
}

/// Carried with the team but not consulted by the possession resolver yet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DefenseScheme {
    #[default]
    Man,
    Zone,
    Press,
}

/// Which bench a team sits on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn opponent(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamSide::Home => f.write_str("home"),
            TeamSide::Away => f.write_str("away"),
        }
    }
}
