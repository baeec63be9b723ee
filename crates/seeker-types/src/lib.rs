//! Shared type definitions for the Seeker evolution demo.
//!
//! These are plain data shapes used by both the genetic algorithm in
//! `seeker-core` and whatever renders it.
//!
//! # Modules
//!
//! - [`geometry`] -- [`Vec2`] points and move vectors, [`Region`] bounds
//! - [`summary`] -- [`GenerationSummary`] reported after every generation

pub mod geometry;
pub mod summary;

// Re-export all public types at crate root for convenience.
pub use geometry::{Region, Vec2};
pub use summary::GenerationSummary;
