//! The target point agents are evaluated against.

use rand::Rng;
use seeker_types::{Region, Vec2};

use crate::error::SimError;

/// Immutable point placed once per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    position: Vec2,
}

impl Target {
    /// Place a target at an explicit position.
    pub const fn new(position: Vec2) -> Self {
        Self { position }
    }

    /// Sample a target uniformly inside `region`.
    ///
    /// Returns [`SimError::EmptyRegion`] if the region cannot be sampled.
    pub fn random(region: &Region, rng: &mut impl Rng) -> Result<Self, SimError> {
        if !region.is_valid() {
            return Err(SimError::EmptyRegion { region: *region });
        }
        let x = rng.random_range(region.min_x..=region.max_x);
        let y = rng.random_range(region.min_y..=region.max_y);
        Ok(Self::new(Vec2::new(x, y)))
    }

    /// Where the target sits.
    pub const fn position(&self) -> Vec2 {
        self.position
    }
}
