//! Exponential backoff schedule with jitter.
//!
//! The schedule is pure arithmetic over attempt numbers. The sources of
//! nondeterminism, the random jitter offset and the actual sleep, sit
//! behind ports so tests can pin them down.

use async_trait::async_trait;
use rand::RngExt;
use std::time::Duration;

/// Source of the random jitter offset.
pub trait Jitter: Send + Sync {
    /// Returns a uniformly random offset in `[0, range_ms)`.
    ///
    /// A `range_ms` of zero must return zero.
    fn offset_within(&self, range_ms: u64) -> u64;
}

/// Thread-local RNG jitter source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngJitter;

impl Jitter for ThreadRngJitter {
    fn offset_within(&self, range_ms: u64) -> u64 {
        if range_ms == 0 {
            return 0;
        }
        rand::rng().random_range(0..range_ms)
    }
}

/// Cooperative sleep port.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Suspends the current task for the given duration.
    async fn sleep(&self, duration: Duration);
}

/// Tokio-backed sleeper.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Exponential backoff schedule for retryable delivery errors.
///
/// Delays start at the initial value and double per attempt, capped at the
/// maximum. Jitter is multiplicative ±50%: the actual delay is
/// `base × (0.5 + r)` with `r` uniform in `[0, 1)`, capped again at the
/// maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffSchedule {
    initial_ms: u64,
    cap_ms: u64,
    max_retries: u32,
}

impl BackoffSchedule {
    /// Creates a schedule from an initial delay, a delay cap, and a retry
    /// budget.
    #[must_use]
    pub const fn new(initial_ms: u64, cap_ms: u64, max_retries: u32) -> Self {
        Self {
            initial_ms,
            cap_ms,
            max_retries,
        }
    }

    /// Number of retries permitted after the first attempt.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Un-jittered delay before the retry following `attempt` (zero-based),
    /// in milliseconds.
    #[must_use]
    pub const fn base_delay_ms(&self, attempt: u32) -> u64 {
        let doubled = match 2u64.checked_pow(attempt) {
            Some(factor) => self.initial_ms.saturating_mul(factor),
            None => u64::MAX,
        };
        if doubled > self.cap_ms { self.cap_ms } else { doubled }
    }

    /// Jittered delay before the retry following `attempt` (zero-based).
    #[must_use]
    pub fn jittered_delay(&self, attempt: u32, jitter: &impl Jitter) -> Duration {
        let base = self.base_delay_ms(attempt);
        // base × (0.5 + r) == base/2 + r×base with r uniform in [0, 1).
        let half = base >> 1;
        let delayed = half.saturating_add(jitter.offset_within(base));
        Duration::from_millis(delayed.min(self.cap_ms))
    }
}

impl Default for BackoffSchedule {
    /// Three retries, 1000ms initial delay, 10000ms cap.
    fn default() -> Self {
        Self::new(1_000, 10_000, 3)
    }
}
