//! Trailing-edge settle timer.

use std::time::{Duration, Instant};

/// Fires once after `period` has passed without a re-arm.
///
/// Each [`arm`](Self::arm) replaces the pending deadline, so only the most
/// recent trigger can fire.
#[derive(Debug, Clone)]
pub struct SettleTimer {
    period: Duration,
    deadline: Option<Instant>,
}

impl SettleTimer {
    /// Disarmed timer that fires `period` after the last [`Self::arm`].
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    /// Quiet period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Cancel any pending deadline and schedule a new one.
    pub fn arm(&mut self, now: Instant) -> Instant {
        let deadline = now + self.period;
        self.deadline = Some(deadline);
        deadline
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Pending deadline.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True while a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Disarm and return true if the deadline has been reached.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
