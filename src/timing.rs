//! Scoped wall-clock instrumentation.
//!
//! A [`ScopedTimer`] is acquired on entry to the measured call and reports
//! through the logger when it is dropped, so timing state lives with the
//! call being measured rather than in process-global bookkeeping.

use std::time::Instant;

pub struct ScopedTimer {
    label: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(label: &'static str) -> Self {
        log::debug!("time[{label}] started");
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        log::info!("time[{}] {:.3}ms", self.label, elapsed.as_secs_f64() * 1e3);
    }
}

#[cfg(test)]
mod tests {
    use super::ScopedTimer;

    #[test]
    fn reports_on_drop_without_panicking() {
        let timer = ScopedTimer::new("unit");
        drop(timer);
    }
}
