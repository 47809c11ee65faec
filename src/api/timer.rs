use std::time::Duration;

/// Run state of the fixed-period tick source.
///
/// The host scheduler (a `glib` timeout, a test loop) owns the actual
/// clock; this type only records whether ticks should be honored and how
/// many were. Start and stop are idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTimer {
    interval: Duration,
    running: bool,
    tick_count: u64,
}

impl TickTimer {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: false,
            tick_count: 0,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Returns `false` when the timer was already running.
    pub fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.running, true)
    }

    /// Returns `false` when the timer was already stopped.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    /// Counts a firing; ignored while stopped.
    pub fn fire(&mut self) -> bool {
        if self.running {
            self.tick_count += 1;
        }
        self.running
    }

    /// Wall-clock time covered by the ticks fired so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.interval
            .saturating_mul(u32::try_from(self.tick_count).unwrap_or(u32::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::TickTimer;
    use std::time::Duration;

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut timer = TickTimer::new(Duration::from_millis(50));
        assert!(timer.start());
        assert!(!timer.start());
        assert!(timer.stop());
        assert!(!timer.stop());
        assert!(!timer.is_running());
    }

    #[test]
    fn firings_only_count_while_running() {
        let mut timer = TickTimer::new(Duration::from_millis(50));
        assert!(!timer.fire());
        timer.start();
        assert!(timer.fire());
        assert!(timer.fire());
        timer.stop();
        assert!(!timer.fire());
        assert_eq!(timer.tick_count(), 2);
        assert_eq!(timer.elapsed(), Duration::from_millis(100));
    }
}
