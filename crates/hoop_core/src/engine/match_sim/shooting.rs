//! Shot resolution
//!
//! Pure functions: shot-type choice from tendencies and spacing, and the
//! make probability from shooter/defender ratings.

use rand::Rng;

use crate::models::{PlayerAttributes, ShotTendencies, ShotType, Spacing};

pub const MIN_SUCCESS_PROBABILITY: f64 = 0.10;
pub const MAX_SUCCESS_PROBABILITY: f64 = 0.90;

const RATING_SCALE: f64 = 20.0;
const OFFENSE_BONUS: f64 = 0.20;
const DEFENSE_PENALTY: f64 = 0.15;
const IQ_BONUS: f64 = 0.10;
const FATIGUE_PENALTY: f64 = 0.10;
/// Stamina strictly below this costs `FATIGUE_PENALTY`.
const FATIGUE_THRESHOLD: u8 = 5;

/// Three → mid → layup against cumulative weights.
///
/// Spacing scales the three-point weight before the draw. A shooter with no
/// three/mid/drive tendency takes a mid-range shot.
pub fn determine_shot_type<R: Rng + ?Sized>(
    tendencies: &ShotTendencies,
    spacing: Spacing,
    rng: &mut R,
) -> ShotType {
    let three = tendencies.three_point as f64 * spacing.three_point_multiplier();
    let mid = tendencies.mid_range as f64;
    let drive = tendencies.drive as f64;
    let total = three + mid + drive;

    if total <= 0.0 {
        return ShotType::MidRange;
    }

    let draw = rng.gen::<f64>() * total;
    if draw < three {
        ShotType::ThreePoint
    } else if draw < three + mid {
        ShotType::MidRange
    } else {
        ShotType::Layup
    }
}

/// Make probability, always within `[0.10, 0.90]`.
pub fn shot_success_probability(
    shot_type: ShotType,
    shooter: &PlayerAttributes,
    defender: &PlayerAttributes,
) -> f64 {
    let mut probability = shot_type.base_success_rate();
    probability += shooter.scoring as f64 / RATING_SCALE * OFFENSE_BONUS;
    probability -= defender.defense as f64 / RATING_SCALE * DEFENSE_PENALTY;
    probability += shooter.basketball_iq as f64 / RATING_SCALE * IQ_BONUS;
    if shooter.stamina < FATIGUE_THRESHOLD {
        probability -= FATIGUE_PENALTY;
    }
    probability.clamp(MIN_SUCCESS_PROBABILITY, MAX_SUCCESS_PROBABILITY)
}
