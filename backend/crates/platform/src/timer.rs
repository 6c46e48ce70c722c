//! Timer Infrastructure
//!
//! Simulated latency is expressed through the [`Delay`] trait so that
//! production code waits on the tokio clock while tests substitute
//! [`NoDelay`] or [`RecordingDelay`].

use std::sync::Mutex;
use std::time::Duration;

/// Trait for awaiting a fixed amount of time
#[trait_variant::make(Delay: Send)]
pub trait LocalDelay {
    /// Suspend the caller for `duration`
    async fn sleep(&self, duration: Duration);
}

/// Wall-clock delay backed by `tokio::time::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Delay that completes immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    async fn sleep(&self, _duration: Duration) {}
}

/// Delay that completes immediately and records every requested duration
#[derive(Debug, Default)]
pub struct RecordingDelay {
    requested: Mutex<Vec<Duration>>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations requested so far, in call order
    pub fn requested(&self) -> Vec<Duration> {
        self.requested
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Delay for RecordingDelay {
    async fn sleep(&self, duration: Duration) {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(duration);
        }
    }
}
