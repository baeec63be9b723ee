//! Run state: the population, the target, and the random source.
//!
//! [`Simulation`] owns everything a single run needs. The RNG is seeded
//! from `world.seed`, so a given configuration always evolves the same way.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use seeker_types::GenerationSummary;
use tracing::info;

use crate::agent::Agent;
use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::population::Population;
use crate::target::Target;

/// A read-only view of one tick, handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Zero-based index of the running generation.
    pub generation: u64,
    /// Steps taken so far in this generation (1 after the first tick).
    pub step: usize,
    /// Steps per generation.
    pub step_count: usize,
    /// Current agents, for drawing.
    pub agents: &'a [Agent],
    /// The target, for drawing.
    pub target: &'a Target,
}

/// Mutable state of a run.
#[derive(Debug, Clone)]
pub struct Simulation {
    population: Population,
    target: Target,
    rng: SmallRng,
    /// Index of the running generation.
    generation: u64,
    /// Steps taken in the running generation.
    step: usize,
}

impl Simulation {
    /// Create a run from configuration, seeding the RNG from `world.seed`.
    pub fn new(config: &SimulationConfig) -> Result<Self, SimError> {
        Self::with_rng(config, SmallRng::seed_from_u64(config.world.seed))
    }

    /// Create a run drawing randomness from `rng`.
    ///
    /// The first generation is seeded before the target is placed.
    pub fn with_rng(config: &SimulationConfig, mut rng: SmallRng) -> Result<Self, SimError> {
        let population = Population::new(&config.population, &mut rng)?;
        let target = Target::random(&config.target_region(), &mut rng)?;
        info!(
            size = population.size(),
            step_count = population.step_count(),
            mutation_rate = population.mutation_rate(),
            parent_pool_size = population.parent_pool_size(),
            target_x = target.position().x,
            target_y = target.position().y,
            "Simulation created"
        );
        Ok(Self {
            population,
            target,
            rng,
            generation: 0,
            step: 0,
        })
    }

    /// The current population.
    pub const fn population(&self) -> &Population {
        &self.population
    }

    /// The target for this run.
    pub const fn target(&self) -> &Target {
        &self.target
    }

    /// Index of the running generation.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Steps taken in the running generation.
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Whether every step of the running generation has been taken.
    pub const fn generation_complete(&self) -> bool {
        self.step >= self.population.step_count()
    }

    /// Advance every agent by one step.
    ///
    /// Fails with [`SimError::StrategyExhausted`] once the generation is
    /// complete; call [`advance_generation`](Self::advance_generation) first.
    pub fn tick(&mut self) -> Result<(), SimError> {
        if self.generation_complete() {
            return Err(SimError::StrategyExhausted {
                cursor: self.step,
                length: self.population.step_count(),
            });
        }
        self.population.advance_all()?;
        self.step = self.step.saturating_add(1);
        Ok(())
    }

    /// The render view for the current tick.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            generation: self.generation,
            step: self.step,
            step_count: self.population.step_count(),
            agents: self.population.agents(),
            target: &self.target,
        }
    }

    /// Statistics for the agents as they stand now.
    pub fn summarize(&self) -> GenerationSummary {
        self.population
            .summarize(&self.target, self.generation, self.step)
    }

    /// Close the running generation and breed the next one.
    ///
    /// Returns the summary of the generation that just ended.
    pub fn advance_generation(&mut self) -> Result<GenerationSummary, SimError> {
        let summary = self.summarize();
        self.population
            .create_next_generation(&self.target, &mut self.rng)?;
        self.generation = self.generation.saturating_add(1);
        self.step = 0;
        Ok(summary)
    }
}
