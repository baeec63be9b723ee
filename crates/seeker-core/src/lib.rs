//! Genetic algorithm and generation cycle for the Seeker evolution demo.
//!
//! A fixed-size population of agents each follows a pre-drawn strategy of
//! move vectors. After every agent has taken `step_count` steps, the agents
//! closest to the target breed the next generation through uniform
//! crossover and per-gene mutation.
//!
//! # Modules
//!
//! - [`agent`] -- [`Agent`]: a position, a strategy, and a cursor into it.
//! - [`config`] -- Configuration loading from `seeker-config.yaml` into
//!   strongly-typed structs.
//! - [`control`] -- [`RunControl`] for pause, stop, frame pacing, and the
//!   generation bound.
//! - [`error`] -- [`SimError`] for misuse of the genetic operators.
//! - [`genetics`] -- Random strategies, uniform crossover, and mutation.
//! - [`population`] -- [`Population`]: selection and generation advance.
//! - [`runner`] -- The async driver loop and [`FrameCallback`].
//! - [`simulation`] -- [`Simulation`]: population, target, and seeded RNG.
//! - [`strategy`] -- [`Strategy`] and [`MoveRange`].
//! - [`target`] -- [`Target`] placement.
//!
//! [`Agent`]: agent::Agent
//! [`RunControl`]: control::RunControl
//! [`SimError`]: error::SimError
//! [`Population`]: population::Population
//! [`FrameCallback`]: runner::FrameCallback
//! [`Simulation`]: simulation::Simulation
//! [`Strategy`]: strategy::Strategy
//! [`MoveRange`]: strategy::MoveRange
//! [`Target`]: target::Target

pub mod agent;
pub mod config;
pub mod control;
pub mod error;
pub mod genetics;
pub mod population;
pub mod runner;
pub mod simulation;
pub mod strategy;
pub mod target;

pub use error::SimError;
