//! Hoop CLI Library
//!
//! 데모 로스터, 플레이바이플레이/박스스코어 출력, 요청 파일 실행.

use anyhow::{bail, Context, Result};
use hoop_core::engine::Narrator;
use hoop_core::models::{GameState, Pace, ShotTendencies, Spacing, StatLine};
use hoop_core::{Player, PlayerAttributes, Position, Tactics, TeamConfig, TeamSide};
use std::fs;
use std::path::Path;

fn stock_player(
    id: &str,
    name: &str,
    position: Position,
    ratings: [u8; 6],
    tendencies: [u8; 4],
) -> Player {
    let [scoring, passing, defense, athleticism, basketball_iq, stamina] = ratings;
    let [three_point, mid_range, drive, post_up] = tendencies;
    Player::new(
        id,
        name,
        position,
        PlayerAttributes { scoring, passing, defense, athleticism, basketball_iq, stamina },
        ShotTendencies { three_point, mid_range, drive, post_up },
    )
}

/// 데모용 두 팀: 외곽 위주의 빠른 팀 vs 골밑 위주의 느린 팀
pub fn stock_teams() -> (TeamConfig, TeamConfig) {
    let dragons = TeamConfig::new(
        "Dragons",
        vec![
            stock_player("drg-1", "陈子豪", Position::PG, [14, 17, 11, 14, 16, 15], [45, 20, 30, 5]),
            stock_player("drg-2", "王浩", Position::SG, [17, 11, 10, 13, 13, 14], [55, 25, 15, 5]),
            stock_player("drg-3", "李明", Position::SF, [13, 11, 13, 15, 12, 14], [35, 30, 25, 10]),
            stock_player("drg-4", "赵磊", Position::PF, [11, 9, 14, 15, 11, 13], [25, 30, 25, 20]),
            stock_player("drg-5", "孙伟", Position::C, [10, 8, 16, 16, 10, 12], [5, 20, 35, 40]),
        ],
        Tactics { pace: Pace::Fast, spacing: Spacing::Outside, ..Tactics::default() },
    );
    let tigers = TeamConfig::new(
        "Tigers",
        vec![
            stock_player("tgr-1", "周杰", Position::PG, [13, 16, 12, 13, 15, 15], [30, 30, 35, 5]),
            stock_player("tgr-2", "吴强", Position::SG, [15, 12, 12, 13, 12, 14], [35, 35, 25, 5]),
            stock_player("tgr-3", "郑凯", Position::SF, [14, 10, 13, 15, 12, 13], [25, 30, 35, 10]),
            stock_player("tgr-4", "冯刚", Position::PF, [13, 9, 14, 16, 11, 13], [10, 30, 30, 30]),
            stock_player("tgr-5", "高山", Position::C, [12, 8, 17, 17, 11, 12], [0, 15, 35, 50]),
        ],
        Tactics { pace: Pace::Slow, spacing: Spacing::Inside, ..Tactics::default() },
    );
    (dragons, tigers)
}

pub fn parse_spacing(value: &str) -> Result<Spacing> {
    match value.to_ascii_lowercase().as_str() {
        "outside" => Ok(Spacing::Outside),
        "balanced" => Ok(Spacing::Balanced),
        "inside" => Ok(Spacing::Inside),
        other => bail!("unknown spacing '{other}' (expected outside, balanced or inside)"),
    }
}

/// 이벤트 한 줄씩, 내레이터를 거쳐서
pub fn render_play_by_play<N: Narrator + ?Sized>(state: &GameState, narrator: &N) -> String {
    let mut out = String::new();
    for event in &state.events {
        let clock = event.time.max(0);
        out.push_str(&format!(
            "Q{} {:02}:{:02} [{}] {}\n",
            event.quarter,
            clock / 60,
            clock % 60,
            event.team,
            narrator.narrate(event)
        ));
    }
    out
}

fn stat_row(label: &str, line: &StatLine) -> String {
    format!(
        "{:<16} {:>4} {:>3}-{:<3} {:>5.1} {:>3}-{:<3} {:>5.1} {:>4} {:>4}\n",
        label,
        line.points,
        line.field_goals_made,
        line.field_goals_attempted,
        line.field_goal_pct() * 100.0,
        line.three_pointers_made,
        line.three_pointers_attempted,
        line.three_point_pct() * 100.0,
        line.rebounds,
        line.assists
    )
}

pub fn render_box_score(state: &GameState, home_name: &str, away_name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Final: {} {} - {} {}\n",
        home_name, state.home_score, state.away_score, away_name
    ));

    for (side, name) in [(TeamSide::Home, home_name), (TeamSide::Away, away_name)] {
        out.push_str(&format!("\n{name}\n"));
        out.push_str(&format!(
            "{:<16} {:>4} {:>7} {:>5} {:>7} {:>5} {:>4} {:>4}\n",
            "", "PTS", "FG", "FG%", "3P", "3P%", "REB", "AST"
        ));
        for player in state.players_of(side) {
            out.push_str(&stat_row(&player.name, &player.totals));
        }
        out.push_str(&stat_row("TEAM", state.team_stats(side)));
    }
    out
}

pub fn read_request(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    if content.trim().is_empty() {
        bail!("Request file {} is empty", path.display());
    }
    Ok(content)
}

pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
