//! A single agent following its strategy.

use seeker_types::Vec2;

use crate::error::SimError;
use crate::strategy::Strategy;

/// A positioned entity that consumes one strategy move per step.
///
/// Agents are built fresh at the origin for every generation and are
/// owned exclusively by their [`Population`](crate::population::Population).
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    /// Current position in display coordinates.
    position: Vec2,
    /// The movement plan for this generation.
    strategy: Strategy,
    /// Index of the next move to apply. Never exceeds `strategy.len()`.
    cursor: usize,
}

impl Agent {
    /// Create an agent at the origin with its cursor at the first move.
    pub const fn new(strategy: Strategy) -> Self {
        Self {
            position: Vec2::ZERO,
            strategy,
            cursor: 0,
        }
    }

    /// Current position.
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// The strategy this agent follows.
    pub const fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Number of moves already applied.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether every move has been applied.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.strategy.len()
    }

    /// Apply the next move and return the new position.
    ///
    /// Stepping past the end of the strategy is a caller bug and returns
    /// [`SimError::StrategyExhausted`] without moving the agent.
    pub fn advance(&mut self) -> Result<Vec2, SimError> {
        let step = self
            .strategy
            .get(self.cursor)
            .ok_or(SimError::StrategyExhausted {
                cursor: self.cursor,
                length: self.strategy.len(),
            })?;
        self.position += step;
        self.cursor = self.cursor.saturating_add(1);
        Ok(self.position)
    }

    /// Euclidean distance from the current position to `point`.
    pub fn distance_to(&self, point: Vec2) -> f64 {
        self.position.distance(point)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn two_step_agent() -> Agent {
        Agent::new(Strategy::from_moves(vec![
            Vec2::new(1.0, 0.5),
            Vec2::new(-0.5, 1.0),
        ]))
    }

    #[test]
    fn new_agent_starts_at_origin() {
        let agent = two_step_agent();
        assert_eq!(agent.position(), Vec2::ZERO);
        assert_eq!(agent.cursor(), 0);
        assert!(!agent.is_exhausted());
    }

    #[test]
    fn advance_applies_moves_in_order() {
        let mut agent = two_step_agent();
        assert_eq!(agent.advance().unwrap(), Vec2::new(1.0, 0.5));
        assert_eq!(agent.advance().unwrap(), Vec2::new(0.5, 1.5));
        assert_eq!(agent.cursor(), 2);
        assert!(agent.is_exhausted());
    }

    #[test]
    fn advance_past_end_fails_fast() {
        let mut agent = two_step_agent();
        agent.advance().unwrap();
        agent.advance().unwrap();

        let result = agent.advance();
        assert!(matches!(
            result,
            Err(SimError::StrategyExhausted {
                cursor: 2,
                length: 2
            })
        ));
        // Neither position nor cursor moved.
        assert_eq!(agent.position(), Vec2::new(0.5, 1.5));
        assert_eq!(agent.cursor(), 2);
    }

    #[test]
    fn distance_to_is_euclidean() {
        let mut agent = Agent::new(Strategy::from_moves(vec![Vec2::new(3.0, 4.0)]));
        assert!((agent.distance_to(Vec2::ZERO)).abs() < f64::EPSILON);
        agent.advance().unwrap();
        assert!((agent.distance_to(Vec2::ZERO) - 5.0).abs() < 1e-12);
        assert!((agent.distance_to(Vec2::new(3.0, 0.0)) - 4.0).abs() < 1e-12);
    }
}
