//! Frame clock: turns host timestamps into elapsed-time deltas.
//!
//! Hosts that own a monotonic clock pass "now" in milliseconds; the clock
//! reports how much time passed since the previous reading. After `resync`
//! the next reading only re-establishes the reference and reports zero,
//! which is how a resume avoids charging paused time to gravity.

/// Longest delta reported for a single reading.
///
/// A host that stalls (debugger, suspended laptop) should not replay minutes
/// of gravity in one tick.
pub const MAX_FRAME_DELTA_MS: u32 = 250;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameClock {
    last_ms: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Record `now_ms` and return the time elapsed since the previous reading.
    ///
    /// The first reading after construction or `resync` returns 0. Readings
    /// that go backwards return 0 and move the reference.
    pub fn advance(&mut self, now_ms: u64) -> u32 {
        let elapsed = match self.last_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_ms = Some(now_ms);
        elapsed.min(MAX_FRAME_DELTA_MS as u64) as u32
    }

    /// Drop the reference; the next `advance` starts measuring from its own "now".
    pub fn resync(&mut self) {
        self.last_ms = None;
    }

    pub fn last_ms(&self) -> Option<u64> {
        self.last_ms
    }
}
