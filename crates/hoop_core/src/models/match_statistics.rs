use serde::{Deserialize, Serialize};

use super::{ShotType, TeamSide};

/// Box-score counters shared by the team and player aggregates.
///
/// Free throws, steals, blocks, turnovers and fouls are part of the schema
/// but nothing records them yet. A new event kind must add its producer and
/// its counter update together.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StatLine {
    pub points: u32,
    pub field_goals_made: u32,
    pub field_goals_attempted: u32,
    pub three_pointers_made: u32,
    pub three_pointers_attempted: u32,
    pub free_throws_made: u32,
    pub free_throws_attempted: u32,
    pub rebounds: u32,
    pub offensive_rebounds: u32,
    pub defensive_rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
    pub fouls: u32,
}

/// Team-level aggregate.
pub type TeamStats = StatLine;

impl StatLine {
    pub fn record_shot(&mut self, shot_type: ShotType, made: bool) {
        self.field_goals_attempted += 1;
        if shot_type == ShotType::ThreePoint {
            self.three_pointers_attempted += 1;
        }
        if made {
            self.field_goals_made += 1;
            if shot_type == ShotType::ThreePoint {
                self.three_pointers_made += 1;
            }
            self.points += shot_type.points();
        }
    }

    pub fn record_rebound(&mut self, offensive: bool) {
        self.rebounds += 1;
        if offensive {
            self.offensive_rebounds += 1;
        } else {
            self.defensive_rebounds += 1;
        }
    }

    pub fn record_assist(&mut self) {
        self.assists += 1;
    }

    pub fn field_goal_pct(&self) -> f32 {
        ratio(self.field_goals_made, self.field_goals_attempted)
    }

    pub fn three_point_pct(&self) -> f32 {
        ratio(self.three_pointers_made, self.three_pointers_attempted)
    }
}

fn ratio(num: u32, den: u32) -> f32 {
    if den == 0 {
        0.0
    } else {
        num as f32 / den as f32
    }
}

/// Per-player box score entry, created on the player's first contribution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerStats {
    pub player_id: String,
    pub name: String,
    pub team: TeamSide,
    #[serde(flatten)]
    pub totals: StatLine,
}

impl PlayerStats {
    pub fn new(player_id: impl Into<String>, name: impl Into<String>, team: TeamSide) -> Self {
        Self { player_id: player_id.into(), name: name.into(), team, totals: StatLine::default() }
    }

    /// Simple MVP metric: points + rebounds + assists.
    pub fn impact(&self) -> u32 {
        self.totals.points + self.totals.rebounds + self.totals.assists
    }
}
