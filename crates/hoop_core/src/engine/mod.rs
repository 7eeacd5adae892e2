pub mod config; // Tuning: assist/rebound chances, possession clock
pub(crate) mod events; // Event construction + default commentary
pub mod match_sim;
pub mod narration; // External commentary seam
pub mod selection; // Weighted pick shared by every selector
mod stats; // Box-score updates on GameState

pub use config::{ClockConfig, EngineConfig, PossessionClock, PossessionConfig};
pub use match_sim::{
    determine_shot_type, possession_duration, shot_success_probability, BasketballGameEngine,
    ClockState, GameClock,
};
pub use narration::{narrate_log, Narrator, PlainNarrator};
pub use selection::{weighted_index, weighted_pick};
