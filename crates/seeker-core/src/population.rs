//! The population of agents and the generation cycle.
//!
//! Each generation is scored by the distance of every agent's final
//! position to the target. The `parent_pool_size` closest agents form the
//! breeding pool (elitist truncation selection). Every child picks two
//! parents from that pool uniformly with replacement, so a parent may be
//! reused or even paired with itself. The child strategy is the uniform
//! crossover of the two, then mutated. Nobody survives unchanged: even an
//! unmutated child is a fresh agent at the origin.

use rand::Rng;
use rand::seq::IndexedRandom;
use seeker_types::GenerationSummary;
use tracing::debug;

use crate::agent::Agent;
use crate::config::PopulationConfig;
use crate::error::SimError;
use crate::genetics;
use crate::strategy::MoveRange;
use crate::target::Target;

/// Fixed-size set of agents for the current generation.
#[derive(Debug, Clone)]
pub struct Population {
    /// Agents of the current generation, replaced wholesale each generation.
    agents: Vec<Agent>,
    /// Number of agents per generation.
    size: usize,
    /// Strategy length and number of steps per generation.
    step_count: usize,
    /// Per-gene replacement probability.
    mutation_rate: f64,
    /// Number of fittest agents allowed to breed.
    parent_pool_size: usize,
    /// Range move components are drawn from.
    move_range: MoveRange,
}

impl Population {
    /// Build a population from configuration and seed its first generation.
    pub fn new(config: &PopulationConfig, rng: &mut impl Rng) -> Result<Self, SimError> {
        let mut population = Self {
            agents: Vec::new(),
            size: config.size,
            step_count: config.step_count,
            mutation_rate: config.mutation_rate,
            parent_pool_size: config.parent_pool_size,
            move_range: config.move_range()?,
        };
        population.create_first_generation(rng);
        Ok(population)
    }

    /// Replace all agents with fresh ones following uniformly random strategies.
    pub fn create_first_generation(&mut self, rng: &mut impl Rng) {
        self.agents = (0..self.size)
            .map(|_| {
                Agent::new(genetics::random_strategy(
                    self.step_count,
                    self.move_range,
                    rng,
                ))
            })
            .collect();
        debug!(
            size = self.size,
            step_count = self.step_count,
            "First generation created"
        );
    }

    /// Agents of the current generation.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Number of agents per generation.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of steps per generation.
    pub const fn step_count(&self) -> usize {
        self.step_count
    }

    /// Per-gene mutation probability.
    pub const fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Size of the breeding pool.
    pub const fn parent_pool_size(&self) -> usize {
        self.parent_pool_size
    }

    /// Range move components are drawn from.
    pub const fn move_range(&self) -> MoveRange {
        self.move_range
    }

    /// Advance every agent by one step.
    ///
    /// Agents do not interact, so the order is irrelevant. Fails on the
    /// first agent whose strategy is already exhausted.
    pub fn advance_all(&mut self) -> Result<(), SimError> {
        for agent in &mut self.agents {
            agent.advance()?;
        }
        Ok(())
    }

    /// The `parent_pool_size` agents closest to `target`, nearest first.
    ///
    /// Ranked by squared distance, which orders the same as distance.
    /// Returns `min(parent_pool_size, size)` agents. The sort is stable, so
    /// ties keep population order.
    pub fn select_parents(&self, target: &Target) -> Vec<&Agent> {
        let goal = target.position();
        let mut ranked: Vec<(f64, &Agent)> = self
            .agents
            .iter()
            .map(|agent| (agent.position().distance_squared(goal), agent))
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
        ranked
            .into_iter()
            .take(self.parent_pool_size)
            .map(|(_, agent)| agent)
            .collect()
    }

    /// Breed a full replacement generation from the fittest agents.
    ///
    /// Returns [`SimError::EmptyParentPool`] if selection yields nobody,
    /// and leaves the current agents in place.
    pub fn create_next_generation(
        &mut self,
        target: &Target,
        rng: &mut impl Rng,
    ) -> Result<(), SimError> {
        let parents = self.select_parents(target);
        let mut next_generation = Vec::with_capacity(self.size);

        for _ in 0..self.size {
            let (Some(parent_a), Some(parent_b)) = (parents.choose(rng), parents.choose(rng))
            else {
                return Err(SimError::EmptyParentPool);
            };
            let child = genetics::crossover(parent_a.strategy(), parent_b.strategy(), rng)?;
            let child = genetics::mutate(child, self.mutation_rate, self.move_range, rng);
            next_generation.push(Agent::new(child));
        }

        debug!(
            parents = parents.len(),
            children = next_generation.len(),
            "Next generation bred"
        );
        self.agents = next_generation;
        Ok(())
    }

    /// Fitness statistics for the current agents against `target`.
    #[allow(clippy::cast_precision_loss)]
    pub fn summarize(&self, target: &Target, generation: u64, steps: usize) -> GenerationSummary {
        let goal = target.position();
        let mut best = f64::INFINITY;
        let mut worst = 0.0_f64;
        let mut total = 0.0_f64;
        for agent in &self.agents {
            let distance = agent.distance_to(goal);
            best = best.min(distance);
            worst = worst.max(distance);
            total += distance;
        }

        let (best_distance, mean_distance) = if self.agents.is_empty() {
            (0.0, 0.0)
        } else {
            (best, total / self.agents.len() as f64)
        };

        GenerationSummary {
            generation,
            steps,
            agents: self.agents.len(),
            best_distance,
            mean_distance,
            worst_distance: worst,
        }
    }
}
