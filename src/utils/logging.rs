use std::time::{Duration, Instant};

use log::{log_enabled, warn, Level};

/// Scoped timer emitting trace spans around the tick phases.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("start {label}");
        }
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            let elapsed = self.start.elapsed();
            log::trace!("end {} ({} µs)", self.label, elapsed.as_micros());
        }
    }
}

/// Warns when a tick took longer than the frame budget its fps implies.
pub fn warn_if_tick_budget_exceeded(duration: Duration, budget_ms: f64) {
    let elapsed_ms = duration.as_secs_f64() * 1000.0;
    if elapsed_ms > budget_ms {
        warn!(
            "tick exceeded frame budget: {:.2} ms > {:.2} ms",
            elapsed_ms, budget_ms
        );
    }
}
