//! Event construction
//!
//! Builds `GameEvent`s with their default (Chinese) commentary line. The
//! description is always a valid fallback when no external narrator runs.

use crate::models::{EventType, GameEvent, Player, ShotType, TeamSide};

pub(crate) struct EventGenerator;

impl EventGenerator {
    fn base(event_type: EventType, time: i32, quarter: u32, team: TeamSide) -> GameEvent {
        GameEvent {
            event_type,
            time,
            quarter,
            team,
            player: None,
            success: None,
            points: None,
            shot_type: None,
            assist_to: None,
            offensive: None,
            description: String::new(),
        }
    }

    pub fn shot(
        time: i32,
        quarter: u32,
        team: TeamSide,
        shooter: &Player,
        shot_type: ShotType,
        made: bool,
    ) -> GameEvent {
        let verdict = if made { "命中！" } else { "不中" };
        GameEvent {
            player: Some(shooter.id.clone()),
            success: Some(made),
            points: Some(if made { shot_type.points() } else { 0 }),
            shot_type: Some(shot_type),
            description: format!("{} {} {}", shooter.name, shot_type.label(), verdict),
            ..Self::base(EventType::Shot, time, quarter, team)
        }
    }

    pub fn assist(
        time: i32,
        quarter: u32,
        team: TeamSide,
        assister: &Player,
        shooter: &Player,
    ) -> GameEvent {
        GameEvent {
            player: Some(assister.id.clone()),
            assist_to: Some(shooter.id.clone()),
            description: format!("{} 助攻 {}", assister.name, shooter.name),
            ..Self::base(EventType::Assist, time, quarter, team)
        }
    }

    pub fn rebound(
        time: i32,
        quarter: u32,
        team: TeamSide,
        rebounder: &Player,
        offensive: bool,
    ) -> GameEvent {
        let kind = if offensive { "前场篮板" } else { "后场篮板" };
        GameEvent {
            player: Some(rebounder.id.clone()),
            offensive: Some(offensive),
            description: format!("{} 抢到{}", rebounder.name, kind),
            ..Self::base(EventType::Rebound, time, quarter, team)
        }
    }

    pub fn quarter_end(quarter: u32, team: TeamSide) -> GameEvent {
        GameEvent {
            description: format!("第{}节结束", quarter),
            ..Self::base(EventType::QuarterEnd, 0, quarter, team)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::match_sim::test_fixtures::create_test_player;
    use crate::models::Position;

    #[test]
    fn test_made_three_description() {
        let mut shooter = create_test_player("h1", Position::SG, 10);
        shooter.name = "林书豪".to_string();
        let event = EventGenerator::shot(600, 2, TeamSide::Home, &shooter, ShotType::ThreePoint, true);
        assert_eq!(event.description, "林书豪 三分球 命中！");
        assert_eq!(event.points, Some(3));
        assert_eq!(event.success, Some(true));
        assert!(event.is_made_shot());
    }

    #[test]
    fn test_missed_shot_scores_zero() {
        let shooter = create_test_player("a2", Position::PF, 10);
        let event = EventGenerator::shot(100, 4, TeamSide::Away, &shooter, ShotType::MidRange, false);
        assert_eq!(event.points, Some(0));
        assert!(event.description.ends_with("中投 不中"));
        assert!(!event.is_made_shot());
    }

    #[test]
    fn test_assist_and_rebound_fields() {
        let a = create_test_player("h1", Position::PG, 10);
        let b = create_test_player("h2", Position::C, 10);
        let assist = EventGenerator::assist(500, 1, TeamSide::Home, &a, &b);
        assert_eq!(assist.event_type, EventType::Assist);
        assert_eq!(assist.player.as_deref(), Some("h1"));
        assert_eq!(assist.assist_to.as_deref(), Some("h2"));

        let rebound = EventGenerator::rebound(480, 1, TeamSide::Home, &b, true);
        assert_eq!(rebound.offensive, Some(true));
        assert!(rebound.description.contains("前场篮板"));
    }

    #[test]
    fn test_quarter_end() {
        let event = EventGenerator::quarter_end(3, TeamSide::Away);
        assert_eq!(event.event_type, EventType::QuarterEnd);
        assert_eq!(event.quarter, 3);
        assert_eq!(event.description, "第3节结束");
        assert!(event.player.is_none());
    }
}
