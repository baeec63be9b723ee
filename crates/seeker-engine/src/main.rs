//! Engine binary for the Seeker evolution demo.
//!
//! Loads configuration, builds the simulation, and runs the generation
//! loop with a headless trace renderer until Ctrl-C or the configured
//! generation bound.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `seeker-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Build the simulation (first generation and target)
//! 4. Install the Ctrl-C stop handler
//! 5. Run the generation loop
//! 6. Log the result

mod error;
mod trace_renderer;

use std::path::Path;
use std::sync::Arc;

use seeker_core::config::{LogFormat, SimulationConfig};
use seeker_core::control::RunControl;
use seeker_core::runner;
use seeker_core::simulation::Simulation;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::trace_renderer::TraceRenderer;

/// Name of the configuration file, relative to the working directory.
const CONFIG_FILE: &str = "seeker-config.yaml";

/// Application entry point for the engine.
///
/// # Errors
///
/// Returns an error if configuration, setup, or the run itself fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging depends on it, so report the source after.
    let config_path = Path::new(CONFIG_FILE);
    let config = load_config(config_path)?;

    // 2. Initialize structured logging.
    init_logging(config.logging.format);
    info!(
        config_file = CONFIG_FILE,
        found = config_path.exists(),
        seed = config.world.seed,
        frame_interval_ms = config.world.frame_interval_ms,
        max_generations = config.world.max_generations,
        "Configuration loaded"
    );

    // 3. Build the simulation.
    let mut sim = Simulation::new(&config).map_err(EngineError::from)?;

    // 4. Stop cleanly on Ctrl-C.
    let control = Arc::new(RunControl::from_config(&config.world));
    {
        let control = Arc::clone(&control);
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Ctrl-C received, stopping after the current frame");
                    control.request_stop();
                }
                Err(e) => {
                    warn!(error = %e, "failed to listen for Ctrl-C, run until bounded");
                }
            }
        });
    }

    // 5. Run.
    let mut renderer = TraceRenderer::for_step_count(config.population.step_count);
    let result = runner::run_simulation(&mut sim, &control, &mut renderer)
        .await
        .map_err(EngineError::from)?;

    // 6. Log results.
    runner::log_run_end(&result);
    info!(
        end_reason = ?result.end_reason,
        frames_rendered = renderer.frames_rendered(),
        best_ever = renderer.best_ever(),
        "seeker-engine shutdown complete"
    );

    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` selects the filter (default `info`); `format` selects
/// human-readable or JSON records.
fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}

/// Load the simulation configuration, falling back to defaults when the
/// file does not exist.
fn load_config(path: &Path) -> Result<SimulationConfig, EngineError> {
    if path.exists() {
        Ok(SimulationConfig::from_file(path)?)
    } else {
        let mut config = SimulationConfig::default();
        config.world.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }
}
