//! Randomized delay between successive portal requests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::{sleep, Duration};
use tracing::debug;

use crate::config::PacingConfig;
use crate::progress::ProgressSink;

/// Sleeps a whole number of seconds drawn uniformly from `[start_secs, end_secs)`.
pub struct Pacer {
    pacing: PacingConfig,
    rng: StdRng,
}

impl Pacer {
    pub fn new(pacing: PacingConfig) -> Self {
        Self {
            pacing,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic pacer for tests.
    pub fn with_seed(pacing: PacingConfig, seed: u64) -> Self {
        Self {
            pacing,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn pacing(&self) -> &PacingConfig {
        &self.pacing
    }

    /// Draw the next delay.
    ///
    /// An empty range (rejected by config validation) yields `start_secs`.
    pub fn next_delay(&mut self) -> Duration {
        let PacingConfig {
            start_secs,
            end_secs,
        } = self.pacing;
        if end_secs <= start_secs {
            return Duration::from_secs(start_secs);
        }
        Duration::from_secs(self.rng.gen_range(start_secs..end_secs))
    }

    /// Report and sleep the next delay.
    pub async fn pause(&mut self, progress: &mut dyn ProgressSink) -> Duration {
        let delay = self.next_delay();
        progress.waiting(delay);
        debug!(delay_secs = delay.as_secs(), "Pacing before next request");
        sleep(delay).await;
        delay
    }
}
