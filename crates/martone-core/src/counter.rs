//! Eased integer count-up for statistics.

use crate::constants::COUNTER_DURATION_MS;
use crate::easing::ease_out_cubic;
use crate::error::AttributeError;

/// Displayed value at eased progress `eased`, never past `target`.
pub fn counter_value(start: i64, target: i64, eased: f64) -> i64 {
    let span = (target - start) as f64;
    let value = start + (span * eased.clamp(0.0, 1.0)).floor() as i64;
    value.clamp(start.min(target), start.max(target))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterSample {
    pub value: i64,
    pub finished: bool,
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    pub start: i64,
    pub target: i64,
    pub duration_ms: f64,
    started_at: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(start: i64, target: i64, duration_ms: f64, started_at: f64) -> Self {
        Self {
            start,
            target,
            duration_ms,
            started_at,
            finished: false,
        }
    }

    pub fn stat(target: i64, started_at: f64) -> Self {
        Self::new(0, target, COUNTER_DURATION_MS, started_at)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Value to display at `now`. The sample that reaches full progress
    /// reports exactly `target` and marks the animation finished.
    pub fn sample(&mut self, now: f64) -> CounterSample {
        if self.finished {
            return CounterSample {
                value: self.target,
                finished: true,
            };
        }
        let elapsed = (now - self.started_at).max(0.0);
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed / self.duration_ms).min(1.0)
        };
        if progress >= 1.0 {
            self.finished = true;
            return CounterSample {
                value: self.target,
                finished: true,
            };
        }
        CounterSample {
            value: counter_value(self.start, self.target, ease_out_cubic(progress)),
            finished: false,
        }
    }
}

/// Drive a counter over the given timestamps (milliseconds since start),
/// emitting every sampled value. Sampling stops once the target is shown.
/// Returns `true` if the counter finished within the samples.
pub fn animate_counter(
    start: i64,
    target: i64,
    duration_ms: f64,
    timestamps: impl IntoIterator<Item = f64>,
    mut on_update: impl FnMut(i64),
) -> bool {
    let mut counter = CounterAnimation::new(start, target, duration_ms, 0.0);
    for t in timestamps {
        let s = counter.sample(t);
        on_update(s.value);
        if s.finished {
            return true;
        }
    }
    false
}

/// Parse a `data-target` annotation. A leading integer is accepted so
/// labels such as `"250+"` still count up to 250.
pub fn parse_counter_target(raw: &str) -> Result<i64, AttributeError> {
    let trimmed = raw.trim();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && c == '-')))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end]
        .parse::<i64>()
        .map_err(|_| AttributeError::invalid("data-target", raw))
}
