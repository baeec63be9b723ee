//! Per-generation statistics.

use serde::{Deserialize, Serialize};

/// Fitness statistics for one completed generation.
///
/// Distances are measured from each agent's final position to the target,
/// so lower is better throughout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Zero-based index of the generation these numbers describe.
    pub generation: u64,
    /// Number of steps every agent took during the generation.
    pub steps: usize,
    /// Number of agents evaluated.
    pub agents: usize,
    /// Distance of the closest agent.
    pub best_distance: f64,
    /// Mean distance across all agents.
    pub mean_distance: f64,
    /// Distance of the farthest agent.
    pub worst_distance: f64,
}
