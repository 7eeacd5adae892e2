//! Weighted random selection
//!
//! One cumulative-weight walk shared by shooter, defender, assister and
//! rebounder selection:
//!
//! 1. draw `r` uniformly in `[0, Σw)`
//! 2. subtract weights in order until `r <= 0`, return that item
//! 3. if float rounding leaves `r > 0` after the last item, return the first
//!
//! Negative weights count as zero. An empty slice is an error rather than an
//! out-of-bounds index.

use rand::Rng;

use crate::error::SelectionError;

/// Index of the picked item.
pub fn weighted_index<T, R, F>(items: &[T], weight: F, rng: &mut R) -> Result<usize, SelectionError>
where
    R: Rng + ?Sized,
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return Err(SelectionError::EmptyPopulation);
    }

    let weights: Vec<f64> = items.iter().map(|item| weight(item).max(0.0)).collect();
    let total: f64 = weights.iter().sum();
    let mut remaining = rng.gen::<f64>() * total;

    for (i, w) in weights.iter().enumerate() {
        remaining -= w;
        if remaining <= 0.0 {
            return Ok(i);
        }
    }

    Ok(0)
}

/// Reference to the picked item.
pub fn weighted_pick<'a, T, R, F>(
    items: &'a [T],
    weight: F,
    rng: &mut R,
) -> Result<&'a T, SelectionError>
where
    R: Rng + ?Sized,
    F: Fn(&T) -> f64,
{
    weighted_index(items, weight, rng).map(|i| &items[i])
}

/// Uniform pick over `0..len`.
pub fn uniform_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<usize, SelectionError> {
    if len == 0 {
        return Err(SelectionError::EmptyPopulation);
    }
    Ok(rng.gen_range(0..len))
}
