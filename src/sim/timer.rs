//! Frame countdown timers

use serde::{Deserialize, Serialize};

/// Countdown gating a periodic action (heal, shoot, spawn)
///
/// `ready` counts down one frame per call and keeps reporting ready once it
/// hits zero. It never rearms itself; the caller resets it when it actually
/// consumes the signal, so an unconsumed timer fires on the very next
/// opportunity instead of waiting out another cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    /// Frames remaining until ready
    pub left: u32,
    /// Value restored by `reset`
    pub delay: u32,
}

impl Timer {
    /// A timer that is ready immediately and rearms to `delay`
    pub fn new(delay: u32) -> Self {
        Self { left: 0, delay }
    }

    /// Tick once; true when the countdown has elapsed
    pub fn ready(&mut self) -> bool {
        if self.left > 0 {
            self.left -= 1;
            return false;
        }
        true
    }

    /// Rearm with the full delay
    pub fn reset(&mut self) {
        self.left = self.delay;
    }

    /// Change the rearm value (takes effect on the next `reset`)
    pub fn set_delay(&mut self, delay: u32) {
        self.delay = delay;
    }
}
