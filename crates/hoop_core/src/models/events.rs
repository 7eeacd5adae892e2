use serde::{Deserialize, Serialize};

use super::TeamSide;

/// One entry of the play-by-play feed.
///
/// `time` is the quarter clock (seconds remaining) at the moment the event
/// happened, so within a quarter it is non-increasing along the log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub time: i32,
    pub quarter: u32,
    pub team: TeamSide,
    /// Primary actor (player id).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub player: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shot_type: Option<ShotType>,
    /// Shooter credited by an assist event.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub assist_to: Option<String>,
    /// Rebound secured by the shooting side.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub offensive: Option<bool>,
    pub description: String,
}

impl GameEvent {
    pub fn is_made_shot(&self) -> bool {
        self.event_type == EventType::Shot && self.success == Some(true)
    }
}

/// Event tags. Only `Shot`, `Assist`, `Rebound` and `QuarterEnd` have a
/// producer; the rest are reserved so the replay format stays stable when
/// they get one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Shot,
    Assist,
    Rebound,
    Steal,
    Block,
    Foul,
    Timeout,
    QuarterEnd,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    ThreePoint,
    MidRange,
    Layup,
}

impl ShotType {
    pub fn points(&self) -> u32 {
        match self {
            ShotType::ThreePoint => 3,
            ShotType::MidRange | ShotType::Layup => 2,
        }
    }

    /// Make rate before attribute modifiers.
    pub fn base_success_rate(&self) -> f64 {
        match self {
            ShotType::ThreePoint => 0.35,
            ShotType::MidRange => 0.45,
            ShotType::Layup => 0.55,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShotType::ThreePoint => "三分球",
            ShotType::MidRange => "中投",
            ShotType::Layup => "上篮",
        }
    }
}

/// Append-only, time-ordered event feed.
///
/// Doubles as replay data for persistence and as the input stream for
/// narration. Entries are never mutated or removed once pushed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameEvent> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    pub fn of_type(&self, event_type: EventType) -> impl Iterator<Item = &GameEvent> {
        self.events.iter().filter(move |e| e.event_type == event_type)
    }

    /// Re-derive (home, away) by replaying made shots in order.
    pub fn replay_scores(&self) -> (u32, u32) {
        self.events.iter().filter(|e| e.is_made_shot()).fold((0, 0), |(home, away), e| {
            let points = e.points.unwrap_or(0);
            match e.team {
                TeamSide::Home => (home + points, away),
                TeamSide::Away => (home, away + points),
            }
        })
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a GameEvent;
    type IntoIter = std::slice::Iter<'a, GameEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
