//! Batch Runner
//!
//! 같은 매치업을 시드 목록만큼 병렬로 돌려 통계를 모은다.
//! 각 경기는 자기 엔진과 RNG를 가지므로 공유 상태가 없고,
//! 결과는 시드 순서대로 합산되어 스레드 수와 무관하게 같은 요약이 나온다.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::stat_snapshot::{GameSnapshot, SideTotals};
use crate::engine::{BasketballGameEngine, EngineConfig};
use crate::error::Result;
use crate::models::{MatchConfig, TeamConfig, TeamSide};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games: u32,
    pub home_wins: u32,
    pub away_wins: u32,
    pub ties: u32,
    pub mean_home_score: f64,
    pub mean_away_score: f64,
    pub home: SideTotals,
    pub away: SideTotals,
}

impl BatchSummary {
    fn from_snapshots(snapshots: &[GameSnapshot]) -> Self {
        let mut summary = Self { games: snapshots.len() as u32, ..Self::default() };
        let mut home_points = 0u64;
        let mut away_points = 0u64;

        for game in snapshots {
            match game.winner() {
                Some(TeamSide::Home) => summary.home_wins += 1,
                Some(TeamSide::Away) => summary.away_wins += 1,
                None => summary.ties += 1,
            }
            home_points += game.home_score as u64;
            away_points += game.away_score as u64;
            summary.home.add(&game.home);
            summary.away.add(&game.away);
        }

        if summary.games > 0 {
            summary.mean_home_score = home_points as f64 / summary.games as f64;
            summary.mean_away_score = away_points as f64 / summary.games as f64;
        }
        summary.home.finish();
        summary.away.finish();
        summary
    }

    pub fn side(&self, side: TeamSide) -> &SideTotals {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }
}

/// One simulation per seed; the first failing seed aborts the batch.
pub fn run_batch(
    match_config: MatchConfig,
    home: &TeamConfig,
    away: &TeamConfig,
    engine_config: &EngineConfig,
    seeds: &[u64],
) -> Result<BatchSummary> {
    log::info!(
        "Running batch of {} games: {} vs {}",
        seeds.len(),
        home.name,
        away.name
    );

    let snapshots: Vec<GameSnapshot> = seeds
        .par_iter()
        .map(|&seed| {
            let engine = BasketballGameEngine::with_config(
                match_config,
                home.clone(),
                away.clone(),
                engine_config.clone(),
                seed,
            )?;
            let state = engine.simulate()?;
            Ok(GameSnapshot::from_state(seed, &state))
        })
        .collect::<Result<Vec<_>>>()?;

    let summary = BatchSummary::from_snapshots(&snapshots);
    log::info!(
        "Batch done: home {}-{}-{} away, mean {:.1} - {:.1}",
        summary.home_wins,
        summary.ties,
        summary.away_wins,
        summary.mean_home_score,
        summary.mean_away_score
    );
    Ok(summary)
}

/// `count` consecutive seeds starting at `base`.
pub fn seed_range(base: u64, count: u32) -> Vec<u64> {
    (0..count as u64).map(|i| base.wrapping_add(i)).collect()
}
