//! Genetic operators over [`Strategy`] values.
//!
//! - [`random_strategy`] seeds the first generation.
//! - [`crossover`] is uniform: every gene is an independent coin flip
//!   between the two parents.
//! - [`mutate`] replaces each gene with a fresh random move with
//!   probability `mutation_rate`.
//!
//! All three build new containers, so a child never aliases a parent.

use rand::Rng;

use crate::error::SimError;
use crate::strategy::{MoveRange, Strategy};

/// Draw a strategy of `length` independent random moves.
pub fn random_strategy(length: usize, range: MoveRange, rng: &mut impl Rng) -> Strategy {
    (0..length).map(|_| range.sample(rng)).collect()
}

/// Uniform crossover of two equal-length strategies.
///
/// For each step a uniform roll in `[0, 1)` above one half takes the move
/// from `parent_a`, otherwise from `parent_b`.
pub fn crossover(
    parent_a: &Strategy,
    parent_b: &Strategy,
    rng: &mut impl Rng,
) -> Result<Strategy, SimError> {
    if parent_a.len() != parent_b.len() {
        return Err(SimError::StrategyLengthMismatch {
            left: parent_a.len(),
            right: parent_b.len(),
        });
    }

    Ok(parent_a
        .moves()
        .iter()
        .zip(parent_b.moves())
        .map(|(&a, &b)| if rng.random::<f64>() > 0.5 { a } else { b })
        .collect())
}

/// Replace each move with a fresh random one with probability `mutation_rate`.
///
/// A rate of `0.0` leaves the strategy untouched and `1.0` replaces every
/// move. One roll is consumed per step regardless of the rate.
pub fn mutate(
    strategy: Strategy,
    mutation_rate: f64,
    range: MoveRange,
    rng: &mut impl Rng,
) -> Strategy {
    strategy
        .into_moves()
        .into_iter()
        .map(|step| {
            if rng.random::<f64>() < mutation_rate {
                range.sample(rng)
            } else {
                step
            }
        })
        .collect()
}
