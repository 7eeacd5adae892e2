//! Batch Calibration
//!
//! Runs many seeded games of one matchup and aggregates shooting
//! statistics, used to check that ratings and tactics move the numbers the
//! way they should (shot mix, make rate, win share).

pub mod batch_runner;
pub mod stat_snapshot;

pub use batch_runner::{run_batch, seed_range, BatchSummary};
pub use stat_snapshot::{GameSnapshot, SideTotals};
