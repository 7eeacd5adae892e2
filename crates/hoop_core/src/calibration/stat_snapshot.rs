//! Per-game statistics snapshot for batch aggregation.

use serde::{Deserialize, Serialize};

use crate::models::{GameState, StatLine, TeamSide};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub seed: u64,
    pub home_score: u32,
    pub away_score: u32,
    pub home: StatLine,
    pub away: StatLine,
}

impl GameSnapshot {
    pub fn from_state(seed: u64, state: &GameState) -> Self {
        Self {
            seed,
            home_score: state.home_score,
            away_score: state.away_score,
            home: state.home_stats,
            away: state.away_stats,
        }
    }

    pub fn winner(&self) -> Option<TeamSide> {
        use std::cmp::Ordering;
        match self.home_score.cmp(&self.away_score) {
            Ordering::Greater => Some(TeamSide::Home),
            Ordering::Less => Some(TeamSide::Away),
            Ordering::Equal => None,
        }
    }
}

/// Shooting totals for one side across a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SideTotals {
    pub points: u64,
    pub field_goals_attempted: u64,
    pub field_goals_made: u64,
    pub three_pointers_attempted: u64,
    pub three_pointers_made: u64,
    pub rebounds: u64,
    pub assists: u64,
    /// 3PA / FGA
    pub three_point_attempt_rate: f64,
    pub field_goal_pct: f64,
}

impl SideTotals {
    pub(crate) fn add(&mut self, line: &StatLine) {
        self.points += line.points as u64;
        self.field_goals_attempted += line.field_goals_attempted as u64;
        self.field_goals_made += line.field_goals_made as u64;
        self.three_pointers_attempted += line.three_pointers_attempted as u64;
        self.three_pointers_made += line.three_pointers_made as u64;
        self.rebounds += line.rebounds as u64;
        self.assists += line.assists as u64;
    }

    pub(crate) fn finish(&mut self) {
        self.three_point_attempt_rate = ratio(self.three_pointers_attempted, self.field_goals_attempted);
        self.field_goal_pct = ratio(self.field_goals_made, self.field_goals_attempted);
    }
}

fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}
