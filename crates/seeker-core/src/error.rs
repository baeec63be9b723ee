//! Error types for the `seeker-core` crate.
//!
//! Every variant is a programming error: the genetic algorithm itself has
//! no recoverable failure modes. They surface as [`Err`] values so callers
//! fail fast instead of clamping or wrapping.

use seeker_types::Region;

/// Errors raised by agents, genetic operators, and the generation cycle.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// An agent was stepped after consuming its whole strategy.
    #[error("strategy exhausted: cursor {cursor} has reached strategy length {length}")]
    StrategyExhausted {
        /// Cursor position at the time of the call.
        cursor: usize,
        /// Length of the strategy.
        length: usize,
    },

    /// Crossover was asked to combine strategies of different lengths.
    #[error("cannot cross strategies of different lengths ({left} vs {right})")]
    StrategyLengthMismatch {
        /// Length of the first parent's strategy.
        left: usize,
        /// Length of the second parent's strategy.
        right: usize,
    },

    /// Breeding needs at least one parent but selection returned none.
    #[error("parent pool is empty")]
    EmptyParentPool,

    /// The move range is inverted or not finite.
    #[error("invalid move range [{min}, {max}]")]
    InvalidMoveRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// The target sampling region is empty or not finite.
    #[error("target region is empty: {region:?}")]
    EmptyRegion {
        /// The offending region.
        region: Region,
    },
}
