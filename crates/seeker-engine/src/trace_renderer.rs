//! Headless renderer that writes frames to the trace log.
//!
//! Drawing is left to whatever consumes the core; this renderer
//! reports the swarm centroid every `frame_log_interval` frames at debug
//! level and announces new best distances at info level.

use seeker_core::runner::FrameCallback;
use seeker_core::simulation::Frame;
use seeker_types::{GenerationSummary, Vec2};
use tracing::{debug, info};

/// Frame callback that logs instead of drawing.
#[derive(Debug)]
pub struct TraceRenderer {
    /// Log one frame out of this many (at least 1).
    frame_log_interval: usize,
    /// Frames seen since start.
    frames_rendered: u64,
    /// Closest distance any generation has reached.
    best_ever: Option<f64>,
}

impl TraceRenderer {
    /// Create a renderer logging one frame in `frame_log_interval`.
    pub fn new(frame_log_interval: usize) -> Self {
        Self {
            frame_log_interval: frame_log_interval.max(1),
            frames_rendered: 0,
            best_ever: None,
        }
    }

    /// Create a renderer that logs four frames per generation.
    pub fn for_step_count(step_count: usize) -> Self {
        Self::new(step_count.checked_div(4).unwrap_or(1))
    }

    /// Frames seen since start.
    pub const fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Closest distance reached so far.
    pub const fn best_ever(&self) -> Option<f64> {
        self.best_ever
    }
}

/// Mean position of the agents, or the origin when there are none.
#[allow(clippy::cast_precision_loss)]
fn centroid(frame: &Frame<'_>) -> Vec2 {
    if frame.agents.is_empty() {
        return Vec2::ZERO;
    }
    let sum = frame
        .agents
        .iter()
        .fold(Vec2::ZERO, |acc, agent| acc + agent.position());
    let count = frame.agents.len() as f64;
    Vec2::new(sum.x / count, sum.y / count)
}

impl FrameCallback for TraceRenderer {
    fn on_frame(&mut self, frame: &Frame<'_>) {
        self.frames_rendered = self.frames_rendered.saturating_add(1);
        if frame.step.checked_rem(self.frame_log_interval) != Some(0) {
            return;
        }
        let center = centroid(frame);
        let target = frame.target.position();
        debug!(
            generation = frame.generation,
            step = frame.step,
            step_count = frame.step_count,
            centroid_x = center.x,
            centroid_y = center.y,
            centroid_distance = center.distance(target),
            "Frame"
        );
    }

    fn on_generation(&mut self, summary: &GenerationSummary) {
        let improved = self
            .best_ever
            .is_none_or(|best| summary.best_distance < best);
        if improved {
            self.best_ever = Some(summary.best_distance);
            info!(
                generation = summary.generation,
                best_distance = summary.best_distance,
                "New best distance"
            );
        } else {
            debug!(
                generation = summary.generation,
                best_distance = summary.best_distance,
                best_ever = self.best_ever,
                "No improvement"
            );
        }
    }
}
