//! Match Simulation Engine
//!
//! Possession-based basketball simulation. This module orchestrates:
//!
//! - Construction-time validation and initial `GameState`
//! - The quarter loop (`clock`)
//! - One possession per clock step (`possession`)
//! - Event emission and box-score updates
//!
//! ## Data Flow
//!
//! ```text
//!  MatchConfig + TeamConfig(home) + TeamConfig(away) + seed/RNG
//!         │
//!         ▼
//!  BasketballGameEngine::new()  ── validate ──► ConfigError
//!         │  coin flip for first possession
//!         ▼
//!  simulate()
//!    loop:
//!      clock has time?  ── yes ──► play_possession()  ─► score / stats / events / possession
//!                                   possession_duration() ─► clock.run_off()
//!                       ── no  ──► clock.end_quarter()  ─► quarter_end event | Finished
//!         │
//!         ▼
//!  GameState { scores, events, home_stats, away_stats, player_stats }
//! ```
//!
//! ## Sub-modules
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | `clock` | Quarter clock state machine, possession duration |
//! | `player_selection` | Shooter / defender / assister / rebounder |
//! | `possession` | One possession end to end |
//! | `shooting` | Shot type and make probability |

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

use super::config::EngineConfig;
use super::events::EventGenerator;
use crate::error::{ConfigError, MatchError};
use crate::models::{GameState, MatchConfig, TeamConfig, TeamSide};

pub mod clock;
mod player_selection;
mod possession;
pub mod shooting;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use clock::{possession_duration, ClockState, GameClock};
pub use shooting::{
    determine_shot_type, shot_success_probability, MAX_SUCCESS_PROBABILITY,
    MIN_SUCCESS_PROBABILITY,
};

/// Runs one match from construction to the final whistle.
///
/// The RNG is injected so a given seed replays the same game exactly.
/// `simulate` consumes the engine: there is no way to observe or resume a
/// half-played match.
pub struct BasketballGameEngine<R = ChaCha8Rng> {
    match_config: MatchConfig,
    config: EngineConfig,
    home: TeamConfig,
    away: TeamConfig,
    clock: GameClock,
    state: GameState,
    rng: R,
}

impl BasketballGameEngine<ChaCha8Rng> {
    /// Default tuning, ChaCha8 seeded from `seed`.
    pub fn new(
        match_config: MatchConfig,
        home: TeamConfig,
        away: TeamConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::with_config(match_config, home, away, EngineConfig::default(), seed)
    }

    pub fn with_config(
        match_config: MatchConfig,
        home: TeamConfig,
        away: TeamConfig,
        config: EngineConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(match_config, home, away, config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> BasketballGameEngine<R> {
    pub fn with_rng(
        match_config: MatchConfig,
        home: TeamConfig,
        away: TeamConfig,
        config: EngineConfig,
        mut rng: R,
    ) -> Result<Self, ConfigError> {
        match_config.validate()?;
        config.validate()?;
        home.validate()?;
        away.validate()?;
        ensure_distinct_ids(&home, &away)?;

        let possession = if rng.gen_bool(0.5) { TeamSide::Home } else { TeamSide::Away };
        let clock = GameClock::new(&match_config);
        let state = GameState::new(clock.quarter_duration(), possession);

        Ok(Self { match_config, config, home, away, clock, state, rng })
    }

    pub fn match_config(&self) -> &MatchConfig {
        &self.match_config
    }

    pub fn engine_config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn team(&self, side: TeamSide) -> &TeamConfig {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    /// Play the whole match and return the final state.
    pub fn simulate(mut self) -> Result<GameState, MatchError> {
        log::info!(
            "Simulating {} vs {} ({} min, {} quarters), {} has the ball",
            self.home.name,
            self.away.name,
            self.match_config.duration_minutes,
            self.match_config.quarters,
            self.state.possession
        );

        loop {
            match self.clock.state() {
                ClockState::Finished => break,
                ClockState::InQuarter { .. } if self.clock.has_time() => {
                    let pace = self.team(self.state.possession).tactics.pace;
                    let (quarter, time) = (self.state.quarter, self.state.time_remaining);
                    let outcome = self.play_possession()?;
                    log::trace!(
                        "Q{} {:>4}s {} {} {:?} p={:.3} made={} rebound={:?}",
                        quarter,
                        time,
                        outcome.team,
                        outcome.shooter,
                        outcome.shot_type,
                        outcome.probability,
                        outcome.made,
                        outcome.rebound
                    );
                    let seconds = possession_duration(pace, &self.config.clock, &mut self.rng);
                    self.clock.run_off(seconds);
                    self.state.time_remaining = self.clock.time_remaining();
                }
                ClockState::InQuarter { quarter, .. } => {
                    if let Some(ended) = self.clock.end_quarter() {
                        self.state.events.push(EventGenerator::quarter_end(ended, self.state.possession));
                        self.state.quarter = self.clock.quarter();
                        self.state.time_remaining = self.clock.time_remaining();
                        log::debug!(
                            "End of Q{}: {} - {}",
                            ended,
                            self.state.home_score,
                            self.state.away_score
                        );
                    } else {
                        log::debug!("Final buzzer after Q{}", quarter);
                    }
                }
            }
        }

        log::info!(
            "Final: {} {} - {} {} ({} events)",
            self.home.name,
            self.state.home_score,
            self.state.away_score,
            self.away.name,
            self.state.events.len()
        );

        Ok(self.state)
    }
}

fn ensure_distinct_ids(home: &TeamConfig, away: &TeamConfig) -> Result<(), ConfigError> {
    let home_ids: HashSet<&str> = home.players.iter().map(|p| p.id.as_str()).collect();
    match away.players.iter().find(|p| home_ids.contains(p.id.as_str())) {
        Some(clash) => Err(ConfigError::InvalidRoster {
            team: away.name.clone(),
            reason: format!("player id '{}' is also on {}", clash.id, home.name),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::test_fixtures::*;
    use super::*;
    use crate::engine::config::PossessionClock;
    use crate::models::{EventType, Position, Spacing, Tactics};

    fn simulate(seed: u64) -> GameState {
        let (home, away) = create_test_teams();
        BasketballGameEngine::new(MatchConfig::default(), home, away, seed)
            .unwrap()
            .simulate()
            .unwrap()
    }

    #[test]
    fn test_basic_simulation() {
        let state = simulate(42);

        assert_eq!(state.quarter, 4);
        assert!(state.time_remaining <= 0);
        assert!(!state.events.is_empty());

        let quarter_ends: Vec<u32> =
            state.events.of_type(EventType::QuarterEnd).map(|e| e.quarter).collect();
        assert_eq!(quarter_ends, vec![1, 2, 3]);
    }

    #[test]
    fn test_determinism() {
        let a = simulate(999);
        let b = simulate(999);
        assert_eq!(a, b, "Same seed should produce same result");
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = simulate(1);
        let b = simulate(2);
        assert_ne!(a.events, b.events);
    }

    #[test]
    fn test_score_matches_made_shots() {
        for seed in 0..20 {
            let state = simulate(seed);
            assert_eq!(state.events.replay_scores(), (state.home_score, state.away_score));
            assert_eq!(state.home_stats.points, state.home_score);
            assert_eq!(state.away_stats.points, state.away_score);
        }
    }

    #[test]
    fn test_clock_monotonic_within_quarter_and_resets() {
        let state = simulate(7);
        let full = MatchConfig::default().quarter_duration();

        let mut current_quarter = 1;
        let mut last_time = full;
        let mut first_in_quarter = true;
        for event in state.events.iter() {
            if event.event_type == EventType::QuarterEnd {
                assert_eq!(event.quarter, current_quarter);
                current_quarter += 1;
                last_time = full;
                first_in_quarter = true;
                continue;
            }
            assert_eq!(event.quarter, current_quarter);
            assert!(event.time <= last_time, "clock went backwards in Q{}", current_quarter);
            if first_in_quarter {
                assert_eq!(event.time, full, "Q{} did not start on a full clock", current_quarter);
                first_in_quarter = false;
            }
            last_time = event.time;
        }
        assert_eq!(current_quarter, 4);
    }

    #[test]
    fn test_fixed_clock_possession_count() {
        let (home, away) = create_test_teams();
        // 720s / 24s = 30 possessions per quarter
        let state = BasketballGameEngine::with_config(
            MatchConfig::default(),
            home,
            away,
            EngineConfig::fixed_clock(),
            5,
        )
        .unwrap()
        .simulate()
        .unwrap();

        assert_eq!(state.events.of_type(EventType::Shot).count(), 120);
        assert_eq!(state.time_remaining, 0);
        assert_eq!(EngineConfig::fixed_clock().clock.possession_clock, PossessionClock::Fixed);
    }

    #[test]
    fn test_solo_rosters_do_not_crash() {
        let (home, away) = create_solo_teams();
        let state = BasketballGameEngine::new(MatchConfig::default(), home, away, 3)
            .unwrap()
            .simulate()
            .unwrap();

        assert_eq!(state.events.of_type(EventType::Assist).count(), 0);
        assert!(state.player_stats.len() <= 2);
        for event in state.events.iter().filter(|e| e.player.is_some()) {
            let expected = if event.team == TeamSide::Home { "h1" } else { "a1" };
            assert_eq!(event.player.as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_empty_roster_rejected() {
        let (home, _) = create_test_teams();
        let empty = TeamConfig::new("Nobody", Vec::new(), Tactics::default());
        let result = BasketballGameEngine::new(MatchConfig::default(), home, empty, 1);
        assert!(matches!(result, Err(ConfigError::InvalidRoster { .. })));
    }

    #[test]
    fn test_invalid_duration_rejected() {
        let (home, away) = create_test_teams();
        let result = BasketballGameEngine::new(MatchConfig::new(0, 4), home, away, 1);
        assert!(matches!(result, Err(ConfigError::InvalidDuration { minutes: 0 })));
    }

    #[test]
    fn test_invalid_quarters_rejected() {
        let (home, away) = create_test_teams();
        let result = BasketballGameEngine::new(MatchConfig::new(48, 0), home, away, 1);
        assert!(matches!(result, Err(ConfigError::InvalidQuarters { quarters: 0 })));
    }

    #[test]
    fn test_shared_player_id_rejected() {
        let home = create_test_team("Home", "x");
        let away = create_test_team("Away", "x");
        let result = BasketballGameEngine::new(MatchConfig::default(), home, away, 1);
        let err = result.err().unwrap();
        assert!(err.to_string().contains("is also on Home"));
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let (home, away) = create_test_teams();
        let mut config = EngineConfig::default();
        config.possession.assist_chance = -0.1;
        let result = BasketballGameEngine::with_config(MatchConfig::default(), home, away, config, 1);
        assert!(matches!(result, Err(ConfigError::InvalidTuning(_))));
    }

    #[test]
    fn test_single_quarter_has_no_quarter_end() {
        let (home, away) = create_test_teams();
        let state = BasketballGameEngine::new(MatchConfig::new(12, 1), home, away, 8)
            .unwrap()
            .simulate()
            .unwrap();
        assert_eq!(state.quarter, 1);
        assert_eq!(state.events.of_type(EventType::QuarterEnd).count(), 0);
    }

    #[test]
    fn test_custom_rng_injection() {
        let (home, away) = create_test_teams();
        let rng = rand::rngs::StdRng::seed_from_u64(10);
        let state = BasketballGameEngine::with_rng(
            MatchConfig::new(12, 2),
            home,
            away,
            EngineConfig::default(),
            rng,
        )
        .unwrap()
        .simulate()
        .unwrap();
        assert_eq!(state.quarter, 2);
    }

    #[test]
    fn test_team_accessor_and_tactics_carried() {
        let (mut home, away) = create_test_teams();
        home.tactics.spacing = Spacing::Outside;
        home.players[0].position = Position::C;
        let engine = BasketballGameEngine::new(MatchConfig::default(), home, away, 4).unwrap();
        assert_eq!(engine.team(TeamSide::Home).tactics.spacing, Spacing::Outside);
        assert_eq!(engine.team(TeamSide::Away).name, "Away");
        assert_eq!(engine.match_config().quarters, 4);
        assert_eq!(engine.engine_config(), &EngineConfig::default());
    }
}
