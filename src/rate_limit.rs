//! In-memory sliding-window rate limiting, partitioned by caller identity.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::error::{FeedbackError, Result};

/// Trailing window length.
pub const WINDOW: Duration = Duration::from_secs(60);

/// Accepted calls per identity within [`WINDOW`].
pub const MAX_REQUESTS: usize = 5;

/// Sliding-window limiter over an in-memory table of request timestamps.
///
/// State is process-local: with N horizontally scaled instances the
/// effective limit per identity is `MAX_REQUESTS * N`. Timestamp lists are
/// pruned lazily on each check; the map slot for an idle identity lives
/// until the process exits.
pub struct RateLimiter {
    entries: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Admit or reject one call for `identity`.
    ///
    /// Check and record happen under one lock, so two concurrent calls can
    /// never both observe a free slot and overshoot the limit. Rejected
    /// attempts are not recorded and therefore never extend the window.
    pub fn check_and_record(&self, identity: &str) -> Result<()> {
        self.check_and_record_at(identity, Instant::now())
    }

    /// Internal: check + record with an explicit clock (for testing).
    fn check_and_record_at(&self, identity: &str, now: Instant) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let timestamps = entries.entry(identity.to_string()).or_default();
        prune_window(timestamps, now);
        if timestamps.len() >= MAX_REQUESTS {
            return Err(FeedbackError::RateLimited);
        }
        timestamps.push_back(now);
        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop timestamps that have aged out of the trailing window.
fn prune_window(timestamps: &mut VecDeque<Instant>, now: Instant) {
    while let Some(&front) = timestamps.front() {
        if now.duration_since(front) >= WINDOW {
            timestamps.pop_front();
        } else {
            break;
        }
    }
}
