//! Box-score aggregation
//!
//! Team counters live on `GameState::{home,away}_stats`; player counters
//! are created on a player's first contribution and updated in place.

use crate::models::{GameState, Player, PlayerStats, ShotType, TeamSide};

impl GameState {
    fn player_entry(&mut self, side: TeamSide, player: &Player) -> &mut PlayerStats {
        self.player_stats
            .entry(player.id.clone())
            .or_insert_with(|| PlayerStats::new(player.id.clone(), player.name.clone(), side))
    }

    /// Attempt (and make) for shooter and team; team points on a make.
    pub(crate) fn record_shot(
        &mut self,
        side: TeamSide,
        shooter: &Player,
        shot_type: ShotType,
        made: bool,
    ) {
        self.team_stats_mut(side).record_shot(shot_type, made);
        self.player_entry(side, shooter).totals.record_shot(shot_type, made);
    }

    pub(crate) fn record_assist(&mut self, side: TeamSide, assister: &Player) {
        self.team_stats_mut(side).record_assist();
        self.player_entry(side, assister).totals.record_assist();
    }

    pub(crate) fn record_rebound(&mut self, side: TeamSide, rebounder: &Player, offensive: bool) {
        self.team_stats_mut(side).record_rebound(offensive);
        self.player_entry(side, rebounder).totals.record_rebound(offensive);
    }
}
