//! Trailing-edge debounce over a polled millisecond clock.
//!
//! The pending timer is held as an explicit `Option` deadline instead of a
//! captured closure variable, so the "at most one pending invocation" rule
//! is visible in the type and testable without any timer machinery. The
//! host event loop supplies the current time to [`Debouncer::trigger`] and
//! [`Debouncer::poll`].

use crate::types::DEBOUNCE_INTERVAL_MS;

/// Collapses bursts of trigger events into a single trailing firing.
///
/// There is no leading-edge firing: the first trigger only arms the
/// deadline. A newer trigger supersedes a pending one. There is no external
/// cancellation; a pending deadline either fires or is superseded.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval_ms: u64,
    /// The pending deadline. None means idle.
    deadline_ms: Option<u64>,
}

impl Debouncer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            deadline_ms: None,
        }
    }

    /// Record a trigger event at `now_ms`, replacing any pending deadline.
    pub fn trigger(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms + self.interval_ms);
    }

    /// Returns true exactly once when the pending deadline has elapsed,
    /// clearing it. Returns false while idle or still waiting.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_INTERVAL_MS)
    }
}
