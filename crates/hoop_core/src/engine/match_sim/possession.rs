//! One possession, end to end
//!
//! shooter → defender → shot type → make/miss → (assist | rebound).
//! A make hands the ball over; a miss goes to whoever rebounds it.

use rand::Rng;

use super::player_selection::{select_assister, select_defender, select_rebounder, select_shooter};
use super::shooting::{determine_shot_type, shot_success_probability};
use super::BasketballGameEngine;
use crate::engine::events::EventGenerator;
use crate::error::MatchError;
use crate::models::{ShotType, TeamSide};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PossessionOutcome {
    pub team: TeamSide,
    pub shooter: String,
    pub shot_type: ShotType,
    pub probability: f64,
    pub made: bool,
    /// Side that secured the rebound on a miss.
    pub rebound: Option<TeamSide>,
}

impl<R: Rng> BasketballGameEngine<R> {
    pub(crate) fn play_possession(&mut self) -> Result<PossessionOutcome, MatchError> {
        let Self { home, away, config, state, rng, .. } = self;

        let attacking = state.possession;
        let (offense, defense) = match attacking {
            TeamSide::Home => (&*home, &*away),
            TeamSide::Away => (&*away, &*home),
        };
        let time = state.time_remaining;
        let quarter = state.quarter;

        let shooter_idx = select_shooter(&offense.players, rng)?;
        let shooter = &offense.players[shooter_idx];
        let defender_idx = select_defender(&defense.players, shooter.position, rng)?;
        let defender = &defense.players[defender_idx];

        let shot_type = determine_shot_type(&shooter.tendencies, offense.tactics.spacing, rng);
        let probability =
            shot_success_probability(shot_type, &shooter.attributes, &defender.attributes);
        let made = rng.gen::<f64>() < probability;

        state.events.push(EventGenerator::shot(time, quarter, attacking, shooter, shot_type, made));
        state.record_shot(attacking, shooter, shot_type, made);

        let mut rebound = None;
        if made {
            state.add_points(attacking, shot_type.points());

            if rng.gen::<f64>() < config.possession.assist_chance {
                if let Some(assister_idx) = select_assister(&offense.players, shooter_idx, rng)? {
                    let assister = &offense.players[assister_idx];
                    state.events.push(EventGenerator::assist(time, quarter, attacking, assister, shooter));
                    state.record_assist(attacking, assister);
                }
            }

            state.possession = attacking.opponent();
        } else {
            let side = if rng.gen::<f64>() < config.possession.defensive_rebound_chance {
                attacking.opponent()
            } else {
                attacking
            };
            let rebounding = if side == attacking { offense } else { defense };
            let rebounder = &rebounding.players[select_rebounder(&rebounding.players, rng)?];
            let offensive = side == attacking;

            state.events.push(EventGenerator::rebound(time, quarter, side, rebounder, offensive));
            state.record_rebound(side, rebounder, offensive);
            state.possession = side;
            rebound = Some(side);
        }

        Ok(PossessionOutcome {
            team: attacking,
            shooter: shooter.id.clone(),
            shot_type,
            probability,
            made,
            rebound,
        })
    }
}
