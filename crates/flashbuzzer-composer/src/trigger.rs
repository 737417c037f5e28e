//! Trigger input debouncing

use embassy_time::{Duration, Instant};

/// Debounced boolean input.
///
/// A raw level becomes the stable level only after it has been sampled
/// unchanged for the debounce interval. A stable transition from released to
/// pressed is reported once as a rising edge.
#[derive(Debug, Clone, Copy)]
pub struct TriggerInput {
    debounce: Duration,
    stable: bool,
    candidate: bool,
    changed_at: Instant,
}

impl TriggerInput {
    pub const fn new(debounce: Duration) -> Self {
        Self::new_with_level(debounce, false)
    }

    /// Start from a known level, so an input already held at startup is not
    /// reported as a press until it has been released.
    pub const fn new_with_level(debounce: Duration, pressed: bool) -> Self {
        Self {
            debounce,
            stable: pressed,
            candidate: pressed,
            changed_at: Instant::from_ticks(0),
        }
    }

    /// Debounced level
    pub const fn is_pressed(&self) -> bool {
        self.stable
    }

    /// Feed a raw sample taken at `now`.
    ///
    /// Returns `true` on a debounced rising edge.
    pub fn update(&mut self, pressed: bool, now: Instant) -> bool {
        if pressed != self.candidate {
            self.candidate = pressed;
            self.changed_at = now;
        }
        if self.candidate == self.stable {
            return false;
        }
        if now.saturating_duration_since(self.changed_at) < self.debounce {
            return false;
        }

        self.stable = self.candidate;
        self.stable
    }
}
