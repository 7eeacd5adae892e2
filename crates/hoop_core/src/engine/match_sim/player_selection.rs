//! Player Selection System
//!
//! Picks the four actors of a possession from a roster:
//! - Shooter (weighted by scoring)
//! - Defender (same-position matchup, uniform fallback)
//! - Assister (weighted by passing, excludes shooter)
//! - Rebounder (weighted by athleticism)
//!
//! All functions return roster indices so the caller can keep borrowing the
//! roster while mutating match state.

use rand::Rng;

use crate::engine::selection::{uniform_index, weighted_index};
use crate::error::SelectionError;
use crate::models::{Player, Position};

pub(crate) fn select_shooter<R: Rng + ?Sized>(
    roster: &[Player],
    rng: &mut R,
) -> Result<usize, SelectionError> {
    weighted_index(roster, |p| p.attributes.scoring as f64, rng)
}

/// Same-position defenders first; anyone on the roster otherwise.
pub(crate) fn select_defender<R: Rng + ?Sized>(
    roster: &[Player],
    matchup: Position,
    rng: &mut R,
) -> Result<usize, SelectionError> {
    let same_position: Vec<usize> = roster
        .iter()
        .enumerate()
        .filter(|(_, p)| p.position == matchup)
        .map(|(i, _)| i)
        .collect();

    if same_position.is_empty() {
        return uniform_index(roster.len(), rng);
    }

    let pick = uniform_index(same_position.len(), rng)?;
    Ok(same_position[pick])
}

/// `None` when the shooter has no teammates.
pub(crate) fn select_assister<R: Rng + ?Sized>(
    roster: &[Player],
    shooter_idx: usize,
    rng: &mut R,
) -> Result<Option<usize>, SelectionError> {
    let teammates: Vec<usize> = (0..roster.len()).filter(|&i| i != shooter_idx).collect();
    if teammates.is_empty() {
        return Ok(None);
    }

    let pick = weighted_index(&teammates, |&i| roster[i].attributes.passing as f64, rng)?;
    Ok(Some(teammates[pick]))
}

pub(crate) fn select_rebounder<R: Rng + ?Sized>(
    roster: &[Player],
    rng: &mut R,
) -> Result<usize, SelectionError> {
    weighted_index(roster, |p| p.attributes.athleticism as f64, rng)
}
