//! Whole-match properties checked through the public API.

use std::collections::HashSet;

use hoop_core::engine::narration::narrate_log;
use hoop_core::models::{EventType, ShotTendencies};
use hoop_core::{
    BasketballGameEngine, GameState, MatchConfig, MatchRecord, PlainNarrator, Player,
    PlayerAttributes, Position, Tactics, TeamConfig, TeamSide,
};
use proptest::prelude::*;

fn player(id: &str, position: Position, attributes: PlayerAttributes) -> Player {
    Player::new(id, format!("Player {id}"), position, attributes, ShotTendencies::default())
}

fn team(name: &str, prefix: &str) -> TeamConfig {
    let players = Position::ALL
        .iter()
        .enumerate()
        .map(|(i, &pos)| player(&format!("{prefix}{}", i + 1), pos, PlayerAttributes::uniform(10)))
        .collect();
    TeamConfig::new(name, players, Tactics::default())
}

fn play(config: MatchConfig, home: TeamConfig, away: TeamConfig, seed: u64) -> GameState {
    BasketballGameEngine::new(config, home, away, seed)
        .expect("valid setup")
        .simulate()
        .expect("simulation runs to completion")
}

fn contributors(state: &GameState) -> HashSet<String> {
    state.events.iter().filter_map(|e| e.player.clone()).collect()
}

#[test]
fn identical_rosters_full_game() {
    let state = play(MatchConfig::default(), team("Home", "h"), team("Away", "a"), 42);

    assert_eq!(state.quarter, 4);
    assert!(state.time_remaining <= 0);
    let ends: Vec<u32> = state.events.of_type(EventType::QuarterEnd).map(|e| e.quarter).collect();
    assert_eq!(ends, vec![1, 2, 3]);
}

#[test]
fn high_scorer_takes_most_shots() {
    let mut star = team("Stars", "s");
    star.players[0].attributes.scoring = 20;
    for p in star.players.iter_mut().skip(1) {
        p.attributes.scoring = 1;
    }

    let state = play(MatchConfig::default(), star, team("Away", "a"), 8);
    let star_fga = state.player_stats["s1"].totals.field_goals_attempted;
    let others: u32 = state
        .players_of(TeamSide::Home)
        .filter(|p| p.player_id != "s1")
        .map(|p| p.totals.field_goals_attempted)
        .sum();

    // weights 20 vs 4 x 1
    assert!(star_fga > others * 2, "star {star_fga} vs rest {others}");
}

#[test]
fn narration_covers_every_event() {
    let state = play(MatchConfig::new(12, 2), team("Home", "h"), team("Away", "a"), 3);
    let lines = narrate_log(&PlainNarrator, &state.events);
    assert_eq!(lines.len(), state.events.len());
    assert!(lines.iter().all(|line| !line.is_empty()));
}

#[test]
fn record_matches_state() {
    let state = play(MatchConfig::default(), team("Home", "h"), team("Away", "a"), 17);
    let record = MatchRecord::from_state("Home", "Away", 17, &state).unwrap();

    assert_eq!(record.home_score, state.home_score);
    assert_eq!(record.replay_data, serde_json::to_string(&state.events).unwrap());
    if let Some(mvp) = &record.mvp {
        assert!(state.player_stats.contains_key(&mvp.player_id));
        if let Some(winner) = state.winner() {
            assert_eq!(mvp.team, winner);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_game_invariants(seed in any::<u64>(), minutes in 4u32..=48, quarters in 1u32..=4) {
        let config = MatchConfig::new(minutes, quarters);
        let state = play(config, team("Home", "h"), team("Away", "a"), seed);

        // score consistency
        prop_assert_eq!(state.events.replay_scores(), (state.home_score, state.away_score));
        prop_assert_eq!(state.home_stats.points, state.home_score);
        prop_assert_eq!(state.away_stats.points, state.away_score);

        // quarter bound
        prop_assert_eq!(state.quarter, quarters);
        prop_assert_eq!(
            state.events.of_type(EventType::QuarterEnd).count() as u32,
            quarters - 1
        );

        // stat-map minimality
        let keys: HashSet<String> = state.player_stats.keys().cloned().collect();
        prop_assert_eq!(keys, contributors(&state));

        // assist credits sum to team assists
        let assists: u32 = state.player_stats.values().map(|p| p.totals.assists).sum();
        prop_assert_eq!(assists, state.home_stats.assists + state.away_stats.assists);

        // box-score sanity
        for side in [TeamSide::Home, TeamSide::Away] {
            let line = state.team_stats(side);
            prop_assert!(line.field_goals_made <= line.field_goals_attempted);
            prop_assert!(line.three_pointers_attempted <= line.field_goals_attempted);
        }
    }

    #[test]
    fn prop_same_seed_same_game(seed in any::<u64>()) {
        let a = play(MatchConfig::new(12, 2), team("Home", "h"), team("Away", "a"), seed);
        let b = play(MatchConfig::new(12, 2), team("Home", "h"), team("Away", "a"), seed);
        prop_assert_eq!(a, b);
    }
}
