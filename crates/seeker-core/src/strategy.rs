//! Strategies: the genome each agent follows for one generation.
//!
//! A [`Strategy`] is an ordered list of move vectors, one per simulation
//! step. Strategies are never changed once an agent holds one; crossover
//! and mutation always build a new value.

use rand::Rng;
use seeker_types::Vec2;

use crate::error::SimError;

/// Inclusive range every move component is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveRange {
    min: f64,
    max: f64,
}

impl MoveRange {
    /// The default `[-1, 1]` range.
    pub const UNIT: Self = Self {
        min: -1.0,
        max: 1.0,
    };

    /// Create a range, rejecting inverted or non-finite bounds.
    ///
    /// The span `max - min` must be finite too, or sampling cannot scale
    /// into it.
    pub fn new(min: f64, max: f64) -> Result<Self, SimError> {
        if !min.is_finite() || !max.is_finite() || min > max || !(max - min).is_finite() {
            return Err(SimError::InvalidMoveRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub const fn min(self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub const fn max(self) -> f64 {
        self.max
    }

    /// Whether both components of `step` fall inside the range.
    pub fn contains(self, step: Vec2) -> bool {
        (self.min..=self.max).contains(&step.x) && (self.min..=self.max).contains(&step.y)
    }

    /// Draw a move with two independent uniform components.
    pub fn sample(self, rng: &mut impl Rng) -> Vec2 {
        let x = rng.random_range(self.min..=self.max);
        let y = rng.random_range(self.min..=self.max);
        Vec2::new(x, y)
    }
}

impl Default for MoveRange {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Ordered sequence of per-step move vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Strategy {
    moves: Vec<Vec2>,
}

impl Strategy {
    /// Wrap an explicit list of moves.
    pub const fn from_moves(moves: Vec<Vec2>) -> Self {
        Self { moves }
    }

    /// Number of steps in the strategy.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the strategy has no steps at all.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The move for step `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.moves.get(index).copied()
    }

    /// All moves in order.
    pub fn moves(&self) -> &[Vec2] {
        &self.moves
    }

    /// Consume the strategy and return its moves.
    pub fn into_moves(self) -> Vec<Vec2> {
        self.moves
    }
}

impl FromIterator<Vec2> for Strategy {
    fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}
