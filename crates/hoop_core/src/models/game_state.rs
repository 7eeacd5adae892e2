use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{EventLog, PlayerStats, TeamSide, TeamStats};

/// Everything one simulation produces.
///
/// Built once when the engine is constructed, mutated in place while the
/// match runs and handed back by value from `simulate()`. `player_stats` is
/// an ordered map so serialized output is stable for a given seed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub quarter: u32,
    /// Seconds left in the current quarter; ends at or below zero.
    pub time_remaining: i32,
    pub home_score: u32,
    pub away_score: u32,
    pub possession: TeamSide,
    pub events: EventLog,
    pub home_stats: TeamStats,
    pub away_stats: TeamStats,
    pub player_stats: BTreeMap<String, PlayerStats>,
}

impl GameState {
    pub fn new(quarter_duration: i32, possession: TeamSide) -> Self {
        Self {
            quarter: 1,
            time_remaining: quarter_duration,
            home_score: 0,
            away_score: 0,
            possession,
            events: EventLog::new(),
            home_stats: TeamStats::default(),
            away_stats: TeamStats::default(),
            player_stats: BTreeMap::new(),
        }
    }

    pub fn score(&self, side: TeamSide) -> u32 {
        match side {
            TeamSide::Home => self.home_score,
            TeamSide::Away => self.away_score,
        }
    }

    pub(crate) fn add_points(&mut self, side: TeamSide, points: u32) {
        match side {
            TeamSide::Home => self.home_score += points,
            TeamSide::Away => self.away_score += points,
        }
    }

    pub fn team_stats(&self, side: TeamSide) -> &TeamStats {
        match side {
            TeamSide::Home => &self.home_stats,
            TeamSide::Away => &self.away_stats,
        }
    }

    pub(crate) fn team_stats_mut(&mut self, side: TeamSide) -> &mut TeamStats {
        match side {
            TeamSide::Home => &mut self.home_stats,
            TeamSide::Away => &mut self.away_stats,
        }
    }

    /// `None` on a tie.
    pub fn winner(&self) -> Option<TeamSide> {
        use std::cmp::Ordering;
        match self.home_score.cmp(&self.away_score) {
            Ordering::Greater => Some(TeamSide::Home),
            Ordering::Less => Some(TeamSide::Away),
            Ordering::Equal => None,
        }
    }

    pub fn players_of(&self, side: TeamSide) -> impl Iterator<Item = &PlayerStats> {
        self.player_stats.values().filter(move |p| p.team == side)
    }
}
