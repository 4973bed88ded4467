//! Unit tests for the delivery module.


use crate::delivery::retry::Jitter;

/// Jitter source returning a fixed offset, clamped to the valid range.
struct FixedJitter(u64);

impl Jitter for FixedJitter {
    fn offset_within(&self, range_ms: u64) -> u64 {
        if range_ms == 0 {
            return 0;
        }
        self.0.min(range_ms - 1)
    }
}
