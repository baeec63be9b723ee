//! Generation loop runner with run controls.
//!
//! [`run_simulation`] drives a [`Simulation`] frame by frame:
//!
//! 1. Wait while paused, return if a stop was requested.
//! 2. Advance every agent one step and hand the frame to the renderer.
//! 3. After `step_count` frames, breed the next generation and report its
//!    summary.
//! 4. Sleep for the frame interval.
//!
//! There is no convergence check. The loop only ends on an operator stop
//! or when the optional `max_generations` bound is hit.

use seeker_types::GenerationSummary;
use tracing::{debug, info, warn};

use crate::control::{RunControl, RunEndReason};
use crate::error::SimError;
use crate::simulation::{Frame, Simulation};

/// Errors that can occur during the run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Stepping or breeding failed.
    #[error("simulation error: {source}")]
    Simulation {
        /// The underlying simulation error.
        #[from]
        source: SimError,
    },
}

/// Result of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// Why the run ended.
    pub end_reason: RunEndReason,
    /// Number of generations bred.
    pub generations_completed: u64,
    /// Total frames executed across all generations.
    pub total_steps: u64,
    /// Summary of the last completed generation, if any.
    pub last_summary: Option<GenerationSummary>,
}

/// Receives frames and generation summaries from the runner.
///
/// This is the seam to the renderer: implementations draw
/// [`Frame::agents`] and [`Frame::target`], log, or collect statistics.
pub trait FrameCallback: Send {
    /// Called after every tick, once all agents have moved.
    fn on_frame(&mut self, frame: &Frame<'_>);

    /// Called after a generation has been replaced by its offspring.
    fn on_generation(&mut self, _summary: &GenerationSummary) {}
}

/// A callback that ignores everything, for testing.
pub struct NoOpCallback;

impl FrameCallback for NoOpCallback {
    fn on_frame(&mut self, _frame: &Frame<'_>) {}
}

/// Run the generation loop until stopped or bounded.
///
/// # Errors
///
/// Returns [`RunnerError`] if a tick or a generation advance fails. With a
/// validated configuration this does not happen.
pub async fn run_simulation(
    sim: &mut Simulation,
    control: &RunControl,
    callback: &mut dyn FrameCallback,
) -> Result<RunResult, RunnerError> {
    let mut last_summary: Option<GenerationSummary> = None;
    let mut generations_completed: u64 = 0;
    let mut total_steps: u64 = 0;

    info!(
        max_generations = control.max_generations(),
        frame_interval_ms = control.frame_interval_ms(),
        step_count = sim.population().step_count(),
        "Run starting"
    );

    loop {
        // --- Check pause ---
        if control.is_paused() {
            info!("Run paused, waiting for resume...");
            control.wait_if_paused().await;
            info!("Run resumed");
        }

        // --- Check stop request (before frame) ---
        if control.is_stop_requested() {
            info!(
                generation = sim.generation(),
                step = sim.step(),
                "Operator stop requested"
            );
            return Ok(RunResult {
                end_reason: RunEndReason::OperatorStop,
                generations_completed,
                total_steps,
                last_summary,
            });
        }

        // --- Execute frame ---
        sim.tick()?;
        total_steps = total_steps.saturating_add(1);
        callback.on_frame(&sim.frame());

        // --- Breed next generation ---
        if sim.generation_complete() {
            let summary = sim.advance_generation()?;
            generations_completed = generations_completed.saturating_add(1);
            info!(
                generation = summary.generation,
                best_distance = summary.best_distance,
                mean_distance = summary.mean_distance,
                worst_distance = summary.worst_distance,
                "Generation complete"
            );
            callback.on_generation(&summary);

            if control.generation_limit_reached(generations_completed) {
                info!(
                    generations_completed,
                    max_generations = control.max_generations(),
                    "Generation limit reached"
                );
                return Ok(RunResult {
                    end_reason: RunEndReason::MaxGenerationsReached,
                    generations_completed,
                    total_steps,
                    last_summary: Some(summary),
                });
            }
            last_summary = Some(summary);
        }

        // --- Pace frames ---
        let interval_ms = control.frame_interval_ms();
        if interval_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(interval_ms)).await;
        } else {
            // Unpaced runs still yield so signal handlers on the same
            // runtime get to run.
            tokio::task::yield_now().await;
        }
    }
}

/// Log the end of a run.
pub fn log_run_end(result: &RunResult) {
    info!(
        reason = ?result.end_reason,
        generations_completed = result.generations_completed,
        total_steps = result.total_steps,
        "Run ended"
    );

    if let Some(ref summary) = result.last_summary {
        info!(
            generation = summary.generation,
            best_distance = summary.best_distance,
            mean_distance = summary.mean_distance,
            "Final generation summary"
        );
    } else {
        warn!("Run ended before any generation completed");
    }
    debug!(?result, "Run result");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use seeker_types::Vec2;

    use super::*;
    use crate::config::{PopulationConfig, SimulationConfig};

    fn small_simulation() -> Simulation {
        let config = SimulationConfig {
            population: PopulationConfig {
                size: 6,
                step_count: 4,
                parent_pool_size: 2,
                ..PopulationConfig::default()
            },
            ..SimulationConfig::default()
        };
        Simulation::new(&config).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(u64, usize)>,
        summaries: Vec<GenerationSummary>,
        positions_seen: usize,
    }

    impl FrameCallback for Recorder {
        fn on_frame(&mut self, frame: &Frame<'_>) {
            self.frames.push((frame.generation, frame.step));
            self.positions_seen += frame
                .agents
                .iter()
                .filter(|a| a.position() != Vec2::ZERO)
                .count();
        }

        fn on_generation(&mut self, summary: &GenerationSummary) {
            self.summaries.push(summary.clone());
        }
    }

    #[tokio::test]
    async fn bounded_by_max_generations() {
        let mut sim = small_simulation();
        let control = RunControl::new(0, 3);
        let mut cb = NoOpCallback;

        let result = run_simulation(&mut sim, &control, &mut cb).await.unwrap();

        assert_eq!(result.end_reason, RunEndReason::MaxGenerationsReached);
        assert_eq!(result.generations_completed, 3);
        assert_eq!(result.total_steps, 12);
        assert_eq!(result.last_summary.map(|s| s.generation), Some(2));
        assert_eq!(sim.generation(), 3);
    }

    #[tokio::test]
    async fn operator_stop_before_first_frame() {
        let mut sim = small_simulation();
        let control = RunControl::new(0, 0);
        control.request_stop();
        let mut cb = NoOpCallback;

        let result = run_simulation(&mut sim, &control, &mut cb).await.unwrap();

        assert_eq!(result.end_reason, RunEndReason::OperatorStop);
        assert_eq!(result.total_steps, 0);
        assert!(result.last_summary.is_none());
    }

    #[tokio::test]
    async fn callbacks_see_every_frame_and_generation() {
        let mut sim = small_simulation();
        let control = RunControl::new(0, 2);
        let mut cb = Recorder::default();

        let _ = run_simulation(&mut sim, &control, &mut cb).await.unwrap();

        assert_eq!(
            cb.frames,
            vec![
                (0, 1),
                (0, 2),
                (0, 3),
                (0, 4),
                (1, 1),
                (1, 2),
                (1, 3),
                (1, 4)
            ]
        );
        assert_eq!(cb.summaries.len(), 2);
        assert_eq!(cb.summaries.first().map(|s| s.generation), Some(0));
        assert!(cb.summaries.iter().all(|s| s.steps == 4 && s.agents == 6));
        assert!(cb.positions_seen > 0);
    }

    #[tokio::test]
    async fn stop_requested_from_callback() {
        struct StopAfter {
            control: Arc<RunControl>,
            remaining: usize,
        }
        impl FrameCallback for StopAfter {
            fn on_frame(&mut self, _frame: &Frame<'_>) {
                self.remaining = self.remaining.saturating_sub(1);
                if self.remaining == 0 {
                    self.control.request_stop();
                }
            }
        }

        let mut sim = small_simulation();
        let control = Arc::new(RunControl::new(0, 0));
        let mut cb = StopAfter {
            control: Arc::clone(&control),
            remaining: 6,
        };

        let result = run_simulation(&mut sim, &control, &mut cb).await.unwrap();

        assert_eq!(result.end_reason, RunEndReason::OperatorStop);
        assert_eq!(result.total_steps, 6);
        assert_eq!(result.generations_completed, 1);
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.step(), 2);
    }

    #[tokio::test]
    async fn paused_run_continues_after_resume() {
        let mut sim = small_simulation();
        let control = Arc::new(RunControl::new(0, 1));
        control.pause();

        let resumer = Arc::clone(&control);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            resumer.resume();
        });

        let mut cb = NoOpCallback;
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            run_simulation(&mut sim, &control, &mut cb),
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(result.end_reason, RunEndReason::MaxGenerationsReached);
        assert_eq!(result.total_steps, 4);
        let _ = handle.await;
    }

    #[tokio::test]
    async fn frame_interval_paces_the_loop() {
        let mut sim = small_simulation();
        let control = RunControl::new(5, 1);
        let mut cb = NoOpCallback;

        let started = tokio::time::Instant::now();
        let _ = run_simulation(&mut sim, &control, &mut cb).await.unwrap();
        // Four frames, but the loop returns before sleeping after the last.
        assert!(started.elapsed() >= Duration::from_millis(15));
    }
}
