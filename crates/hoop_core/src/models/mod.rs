pub mod events;
pub mod game_state;
pub mod match_result;
pub mod match_setup;
pub mod match_statistics;
pub mod player;
pub mod team;

pub use events::{EventLog, EventType, GameEvent, ShotType};
pub use game_state::GameState;
pub use match_result::{MatchRecord, MvpSummary};
pub use match_setup::MatchConfig;
pub use match_statistics::{PlayerStats, StatLine, TeamStats};
pub use player::{Player, PlayerAttributes, Position, ShotTendencies};
pub use team::{DefenseScheme, Pace, Spacing, Tactics, TeamConfig, TeamSide};
