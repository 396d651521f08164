//! Fixed-interval gate for sequential vendor requests

use std::time::Duration;
use tokio::time::Instant;

/// Enforces a minimum interval between successive passes
///
/// The first call to [`wait`](Self::wait) returns immediately; each later
/// call sleeps until `interval` has elapsed since the previous pass.
#[derive(Debug, Clone)]
pub struct FixedIntervalGate {
    interval: Duration,
    last_pass: Option<Instant>,
}

impl FixedIntervalGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_pass: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait for the gate to open, then record the pass
    pub async fn wait(&mut self) {
        if let Some(last) = self.last_pass {
            let ready_at = last + self.interval;
            if Instant::now() < ready_at {
                tokio::time::sleep_until(ready_at).await;
            }
        }
        self.last_pass = Some(Instant::now());
    }
}
