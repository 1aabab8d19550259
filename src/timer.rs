//! One-shot timer slot
//!
//! Timers are deadlines polled by the event loop rather than callbacks, so a
//! cancelled timer has nothing left that could fire. A slot holds at most one
//! pending deadline: scheduling always goes through [`TimerSlot::cancel`]
//! first, and dropping the slot cancels whatever is still pending.

use std::time::{Duration, Instant};

/// A scheduled deadline owned by a [`TimerSlot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    /// Monotonic id, increases with every schedule on the same slot
    pub id: u64,
    pub deadline: Instant,
}

#[derive(Debug, Default)]
pub struct TimerSlot {
    pending: Option<PendingTimer>,
    next_id: u64,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a deadline `delay` after `now`, replacing any pending one
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> PendingTimer {
        self.cancel();

        self.next_id += 1;
        let timer = PendingTimer {
            id: self.next_id,
            deadline: now + delay,
        };
        self.pending = Some(timer);
        timer
    }

    /// Drop the pending deadline, if any. Returns the cancelled timer.
    pub fn cancel(&mut self) -> Option<PendingTimer> {
        let cancelled = self.pending.take();
        if let Some(timer) = cancelled {
            log::trace!("Cancelled timer {}", timer.id);
        }
        cancelled
    }

    /// Consume the pending timer if its deadline has been reached
    ///
    /// Returns the fired timer at most once per schedule.
    pub fn poll(&mut self, now: Instant) -> Option<PendingTimer> {
        match self.pending {
            Some(timer) if now >= timer.deadline => self.pending.take(),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<PendingTimer> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod timer_tests;
