//! Repeating effects with explicit lifetimes.
//!
//! Every looping effect (frame loops, glitch text, pulsing buttons) is tied to
//! a [`StopHandle`], so page teardown and tests can halt it deterministically.

use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

// Host timers and the clock used for `now` may disagree by a fraction of a
// millisecond; a timer firing this close to the deadline counts as on time.
const TIMER_SLACK_MS: f64 = 1.0;

/// Fixed-period task clock. Late ticks run once and re-anchor, they do not
/// replay missed periods.
#[derive(Debug)]
pub struct RepeatingTask {
    period_ms: f64,
    next_due: f64,
    runs: u64,
    stop: StopHandle,
}

impl RepeatingTask {
    pub fn new(period_ms: f64, now: f64) -> Self {
        Self {
            period_ms,
            next_due: now + period_ms,
            runs: 0,
            stop: StopHandle::new(),
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    pub fn runs(&self) -> u64 {
        self.runs
    }

    pub fn next_due(&self) -> f64 {
        self.next_due
    }

    /// Whether the task should run at `now`.
    pub fn due(&mut self, now: f64) -> bool {
        if self.stop.is_stopped() || now + TIMER_SLACK_MS < self.next_due {
            return false;
        }
        self.runs += 1;
        self.next_due += self.period_ms;
        if self.next_due <= now {
            self.next_due = now + self.period_ms;
        }
        true
    }
}
