use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::error::ConfigError;

/// Player data for the match simulation engine.
///
/// `id` is the identity used to key box-score entries, so it must be unique
/// across both rosters of a match. `name` is only used for display and
/// event descriptions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub attributes: PlayerAttributes,
    #[serde(default)]
    pub tendencies: ShotTendencies,
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: Position,
        attributes: PlayerAttributes,
        tendencies: ShotTendencies,
    ) -> Self {
        Self { id: id.into(), name: name.into(), position, attributes, tendencies }
    }

    /// Range-check ratings and tendencies.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id.trim().is_empty() {
            return Err(ConfigError::InvalidPlayer {
                player: self.name.clone(),
                reason: "player id must not be empty".to_string(),
            });
        }

        self.attributes.validate().map_err(|e| ConfigError::InvalidPlayer {
            player: self.id.clone(),
            reason: e.to_string(),
        })?;
        self.tendencies.validate().map_err(|e| ConfigError::InvalidPlayer {
            player: self.id.clone(),
            reason: e.to_string(),
        })?;

        Ok(())
    }
}

/// Six-dimensional rating, 1..=20 per axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct PlayerAttributes {
    #[validate(range(min = 1, max = 20))]
    pub scoring: u8,
    #[validate(range(min = 1, max = 20))]
    pub passing: u8,
    #[validate(range(min = 1, max = 20))]
    pub defense: u8,
    #[validate(range(min = 1, max = 20))]
    pub athleticism: u8,
    #[validate(range(min = 1, max = 20))]
    pub basketball_iq: u8,
    #[validate(range(min = 1, max = 20))]
    pub stamina: u8,
}

impl PlayerAttributes {
    /// Every rating set to `value`.
    pub fn uniform(value: u8) -> Self {
        Self {
            scoring: value,
            passing: value,
            defense: value,
            athleticism: value,
            basketball_iq: value,
            stamina: value,
        }
    }
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        Self::uniform(10)
    }
}

/// Relative shot-selection weights (0..=100 each, need not sum to 100).
///
/// `post_up` is part of the player profile but is not consulted when the
/// engine picks a shot type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ShotTendencies {
    #[validate(range(max = 100))]
    pub three_point: u8,
    #[validate(range(max = 100))]
    pub mid_range: u8,
    #[validate(range(max = 100))]
    pub drive: u8,
    #[validate(range(max = 100))]
    pub post_up: u8,
}

impl Default for ShotTendencies {
    fn default() -> Self {
        Self { three_point: 25, mid_range: 25, drive: 25, post_up: 25 }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    pub const ALL: [Position; 5] =
        [Position::PG, Position::SG, Position::SF, Position::PF, Position::C];

    pub fn code(&self) -> &'static str {
        match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(attributes: PlayerAttributes) -> Player {
        Player::new("p1", "Test", Position::PG, attributes, ShotTendencies::default())
    }

    #[test]
    fn test_valid_player_passes() {
        assert!(player(PlayerAttributes::default()).validate().is_ok());
    }

    #[test]
    fn test_rating_out_of_range_is_rejected() {
        let mut attrs = PlayerAttributes::default();
        attrs.scoring = 21;
        let err = player(attrs).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPlayer { ref player, .. } if player == "p1"));

        let mut attrs = PlayerAttributes::default();
        attrs.stamina = 0;
        assert!(player(attrs).validate().is_err());
    }

    #[test]
    fn test_tendency_out_of_range_is_rejected() {
        let mut p = player(PlayerAttributes::default());
        p.tendencies.drive = 101;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_blank_id_is_rejected() {
        let mut p = player(PlayerAttributes::default());
        p.id = "  ".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_position_serde_uses_codes() {
        let json = serde_json::to_string(&Position::C).unwrap();
        assert_eq!(json, "\"C\"");
        let parsed: Position = serde_json::from_str("\"SF\"").unwrap();
        assert_eq!(parsed, Position::SF);
    }

    #[test]
    fn test_tendencies_default_when_missing() {
        let json = r#"{
            "id": "p9", "name": "Nine", "position": "PF",
            "attributes": {"scoring": 12, "passing": 8, "defense": 14,
                           "athleticism": 15, "basketball_iq": 9, "stamina": 11}
        }"#;
        let p: Player = serde_json::from_str(json).unwrap();
        assert_eq!(p.tendencies, ShotTendencies::default());
        assert_eq!(p.attributes.defense, 14);
    }
}
