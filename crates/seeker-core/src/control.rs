//! Run control state shared between the driver loop and its operator.
//!
//! The loop reads these flags once per frame. Whoever holds the other end
//! (a Ctrl-C handler, a UI, a test) can pause, resume, change the frame
//! pacing, or request a clean stop without touching the simulation.
//!
//! All mutable fields are atomics so the type can be shared through an
//! [`Arc`](std::sync::Arc) without locks on the frame loop hot path.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::Notify;

use crate::config::WorldConfig;

/// Reason the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEndReason {
    /// Completed the configured `max_generations`.
    MaxGenerationsReached,
    /// A stop was requested.
    OperatorStop,
}

/// Shared run control state.
#[derive(Debug)]
pub struct RunControl {
    /// Whether the loop is currently paused.
    paused: AtomicBool,

    /// Wakes the loop when resumed.
    resume_notify: Notify,

    /// Whether a stop has been requested.
    stop_requested: AtomicBool,

    /// Delay between frames in milliseconds (runtime-adjustable).
    frame_interval_ms: AtomicU64,

    /// Maximum number of generations (0 = unlimited).
    max_generations: u64,
}

impl RunControl {
    /// Create control state with the given pacing and generation bound.
    pub fn new(frame_interval_ms: u64, max_generations: u64) -> Self {
        Self {
            paused: AtomicBool::new(false),
            resume_notify: Notify::new(),
            stop_requested: AtomicBool::new(false),
            frame_interval_ms: AtomicU64::new(frame_interval_ms),
            max_generations,
        }
    }

    /// Create control state from the `world` section of the configuration.
    pub fn from_config(world: &WorldConfig) -> Self {
        Self::new(world.frame_interval_ms, world.max_generations)
    }

    // -----------------------------------------------------------------------
    // Pause / Resume
    // -----------------------------------------------------------------------

    /// Check whether the loop is paused.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Pause the loop. It sleeps before its next frame until resumed.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
    }

    /// Resume the loop and wake it.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
        self.resume_notify.notify_one();
    }

    /// Wait until the loop is no longer paused.
    ///
    /// Returns immediately if not paused.
    pub async fn wait_if_paused(&self) {
        while self.paused.load(Ordering::Acquire) {
            self.resume_notify.notified().await;
        }
    }

    // -----------------------------------------------------------------------
    // Stop
    // -----------------------------------------------------------------------

    /// Request a clean stop before the next frame.
    ///
    /// Also wakes a paused loop so it can observe the request.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
        self.paused.store(false, Ordering::Release);
        self.resume_notify.notify_one();
    }

    /// Check whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    // -----------------------------------------------------------------------
    // Pacing
    // -----------------------------------------------------------------------

    /// Current delay between frames in milliseconds.
    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms.load(Ordering::Acquire)
    }

    /// Set the delay between frames. Returns the previous value.
    pub fn set_frame_interval_ms(&self, ms: u64) -> u64 {
        self.frame_interval_ms.swap(ms, Ordering::AcqRel)
    }

    // -----------------------------------------------------------------------
    // Boundaries
    // -----------------------------------------------------------------------

    /// Whether `completed` generations meets the configured bound.
    ///
    /// Always `false` when `max_generations` is 0.
    pub const fn generation_limit_reached(&self, completed: u64) -> bool {
        self.max_generations > 0 && completed >= self.max_generations
    }

    /// Configured maximum generations (0 = unlimited).
    pub const fn max_generations(&self) -> u64 {
        self.max_generations
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;

    #[test]
    fn initial_state_is_running() {
        let control = RunControl::new(0, 0);
        assert!(!control.is_paused());
        assert!(!control.is_stop_requested());
    }

    #[test]
    fn pause_and_resume() {
        let control = RunControl::new(0, 0);
        control.pause();
        assert!(control.is_paused());
        control.resume();
        assert!(!control.is_paused());
    }

    #[test]
    fn stop_clears_pause() {
        let control = RunControl::new(0, 0);
        control.pause();
        control.request_stop();
        assert!(control.is_stop_requested());
        assert!(!control.is_paused());
    }

    #[test]
    fn set_frame_interval() {
        let control = RunControl::new(16, 0);
        assert_eq!(control.frame_interval_ms(), 16);
        assert_eq!(control.set_frame_interval_ms(0), 16);
        assert_eq!(control.frame_interval_ms(), 0);
    }

    #[test]
    fn generation_limit_zero_means_unlimited() {
        let control = RunControl::new(0, 0);
        assert!(!control.generation_limit_reached(1_000_000));
    }

    #[test]
    fn generation_limit_reached() {
        let control = RunControl::from_config(&WorldConfig {
            max_generations: 3,
            ..WorldConfig::default()
        });
        assert!(!control.generation_limit_reached(2));
        assert!(control.generation_limit_reached(3));
        assert!(control.generation_limit_reached(4));
    }

    #[tokio::test]
    async fn wait_returns_after_resume() {
        let control = Arc::new(RunControl::new(0, 0));
        control.pause();

        let resumer = Arc::clone(&control);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            resumer.resume();
        });

        tokio::time::timeout(Duration::from_secs(5), control.wait_if_paused())
            .await
            .ok();
        assert!(!control.is_paused());
        let _ = handle.await;
    }
}
