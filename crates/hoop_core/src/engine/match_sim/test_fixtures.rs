//! Test Fixtures Module
//!
//! Centralized test helper functions for engine tests.
//!
//! ## Usage
//! ```ignore
//! #[cfg(test)]
//! use crate::engine::match_sim::test_fixtures::*;
//! ```

use crate::models::{Player, PlayerAttributes, Position, ShotTendencies, Tactics, TeamConfig};

/// A player with every rating at `rating` and even 25/25/25/25 tendencies.
pub fn create_test_player(id: &str, position: Position, rating: u8) -> Player {
    Player::new(
        id,
        format!("Player {}", id),
        position,
        PlayerAttributes::uniform(rating),
        ShotTendencies::default(),
    )
}

/// Five players PG..C with ids `{prefix}1`..`{prefix}5`.
pub fn create_test_roster(prefix: &str, rating: u8) -> Vec<Player> {
    Position::ALL
        .iter()
        .enumerate()
        .map(|(i, &pos)| create_test_player(&format!("{}{}", prefix, i + 1), pos, rating))
        .collect()
}

pub fn create_test_team(name: &str, prefix: &str) -> TeamConfig {
    create_test_team_with_rating(name, prefix, 10)
}

pub fn create_test_team_with_rating(name: &str, prefix: &str, rating: u8) -> TeamConfig {
    TeamConfig::new(name, create_test_roster(prefix, rating), Tactics::default())
}

/// Home roster ids start with `h`, away with `a`.
pub fn create_test_teams() -> (TeamConfig, TeamConfig) {
    (create_test_team("Home", "h"), create_test_team("Away", "a"))
}

/// One-player teams for degenerate-roster tests.
pub fn create_solo_teams() -> (TeamConfig, TeamConfig) {
    (
        TeamConfig::new("Solo Home", vec![create_test_player("h1", Position::C, 10)], Tactics::default()),
        TeamConfig::new("Solo Away", vec![create_test_player("a1", Position::PG, 10)], Tactics::default()),
    )
}
