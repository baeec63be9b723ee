//! Configuration loading and typed config structures for the Seeker demo.
//!
//! The configuration lives in `seeker-config.yaml` in the working
//! directory. This module defines strongly-typed structs that mirror the
//! YAML structure, and provides a loader that reads and validates the
//! file. Every field has a default, so an empty file (or no file) is a
//! valid configuration.

use std::path::Path;

use seeker_types::Region;
use serde::Deserialize;
use tracing::warn;

use crate::strategy::MoveRange;

/// Environment variable overriding `world.seed`.
pub const SEED_ENV: &str = "SEEKER_SEED";

/// Environment variable overriding `world.max_generations`.
pub const MAX_GENERATIONS_ENV: &str = "SEEKER_MAX_GENERATIONS";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but describes an unusable run.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Seed, pacing, and operator bounds.
    #[serde(default)]
    pub world: WorldConfig,

    /// Population and genetic operator parameters.
    #[serde(default)]
    pub population: PopulationConfig,

    /// Size of the render area.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Margins that keep the target away from the display edges.
    #[serde(default)]
    pub target: TargetConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// [`SEED_ENV`] and [`MAX_GENERATIONS_ENV`] override the YAML values
    /// when set to a valid integer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if the values fail [`validate`](Self::validate).
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if the values fail validation.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.world.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a runnable simulation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pop = &self.population;
        if pop.size == 0 {
            return Err(invalid("population.size must be at least 1"));
        }
        if pop.step_count == 0 {
            return Err(invalid("population.step_count must be at least 1"));
        }
        if pop.parent_pool_size == 0 {
            return Err(invalid("population.parent_pool_size must be at least 1"));
        }
        if !(0.0..=1.0).contains(&pop.mutation_rate) {
            return Err(invalid("population.mutation_rate must be within [0, 1]"));
        }
        if pop.move_range().is_err() {
            return Err(invalid(
                "population.move_min must not exceed population.move_max",
            ));
        }
        if !self.target_region().is_valid() {
            return Err(invalid(
                "target margins leave no room inside the display area",
            ));
        }
        Ok(())
    }

    /// The region targets are sampled from.
    pub fn target_region(&self) -> Region {
        Region::from_display(
            self.display.width,
            self.display.height,
            self.target.near_margin,
            self.target.far_margin,
        )
    }
}

fn invalid(reason: &str) -> ConfigError {
    ConfigError::Invalid {
        reason: reason.to_owned(),
    }
}

/// Seed, pacing, and operator bounds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Random seed for reproducibility.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Real-time milliseconds to wait between frames (0 = as fast as possible).
    #[serde(default)]
    pub frame_interval_ms: u64,

    /// Stop after this many generations (0 = run until stopped).
    #[serde(default)]
    pub max_generations: u64,
}

impl WorldConfig {
    /// Override fields with environment variables when set.
    ///
    /// Values that do not parse as integers are ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        if let Some(seed) = env_u64(SEED_ENV) {
            self.seed = seed;
        }
        if let Some(max) = env_u64(MAX_GENERATIONS_ENV) {
            self.max_generations = max;
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            frame_interval_ms: 0,
            max_generations: 0,
        }
    }
}

fn env_u64(name: &str) -> Option<u64> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(variable = name, value = %raw, error = %e, "ignoring unparsable override");
            None
        }
    }
}

/// Population and genetic operator parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PopulationConfig {
    /// Number of agents in every generation.
    #[serde(default = "default_population_size")]
    pub size: usize,

    /// Steps each agent takes per generation (the strategy length).
    #[serde(default = "default_step_count")]
    pub step_count: usize,

    /// Per-gene probability of replacing a move during mutation.
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,

    /// Number of fittest agents kept as the breeding pool.
    #[serde(default = "default_parent_pool_size")]
    pub parent_pool_size: usize,

    /// Lower bound of each move component.
    #[serde(default = "default_move_min")]
    pub move_min: f64,

    /// Upper bound of each move component.
    #[serde(default = "default_move_max")]
    pub move_max: f64,
}

impl PopulationConfig {
    /// The configured move range.
    pub fn move_range(&self) -> Result<MoveRange, crate::SimError> {
        MoveRange::new(self.move_min, self.move_max)
    }
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: default_population_size(),
            step_count: default_step_count(),
            mutation_rate: default_mutation_rate(),
            parent_pool_size: default_parent_pool_size(),
            move_min: default_move_min(),
            move_max: default_move_max(),
        }
    }
}

/// Size of the render area in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Target placement margins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetConfig {
    /// Minimum distance from the left and top edges.
    #[serde(default = "default_near_margin")]
    pub near_margin: u32,

    /// Minimum distance from the right and bottom edges.
    #[serde(default = "default_far_margin")]
    pub far_margin: u32,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            near_margin: default_near_margin(),
            far_margin: default_far_margin(),
        }
    }
}

/// Output format for log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per record.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Record format.
    #[serde(default)]
    pub format: LogFormat,
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_seed() -> u64 {
    42
}

const fn default_population_size() -> usize {
    120
}

const fn default_step_count() -> usize {
    12_000
}

const fn default_mutation_rate() -> f64 {
    0.1
}

const fn default_parent_pool_size() -> usize {
    10
}

const fn default_move_min() -> f64 {
    -1.0
}

const fn default_move_max() -> f64 {
    1.0
}

const fn default_width() -> u32 {
    720
}

const fn default_height() -> u32 {
    480
}

const fn default_near_margin() -> u32 {
    100
}

const fn default_far_margin() -> u32 {
    50
}
