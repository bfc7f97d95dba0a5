//! Timed step clocks
//!
//! Two independent clocks driven by repeating host timers:
//! - `ProgressClock` fills linearly from 0 to 100 over a total duration
//! - `StepClock` walks a discrete index once per `total / steps` and holds on the last step
//!
//! Both are pure: the host calls `tick()` from its own interval, so the
//! clamping rules can be tested without a browser.

use std::time::Duration;

/// Default sampling period of the progress clock
pub const DEFAULT_TICK: Duration = Duration::from_millis(50);

/// Upper bound of the progress value
pub const FULL: f64 = 100.0;

/// Linear 0..=100 progress sampled on a fixed tick
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressClock {
    total: Duration,
    tick: Duration,
    ticks: u32,
}

impl ProgressClock {
    pub fn new(total: Duration, tick: Duration) -> Self {
        Self {
            total,
            tick: tick.max(Duration::from_millis(1)),
            ticks: 0,
        }
    }

    /// Tick period the host interval should use
    pub fn tick_period(&self) -> Duration {
        self.tick
    }

    /// Time covered by the ticks seen so far
    pub fn elapsed(&self) -> Duration {
        self.tick.saturating_mul(self.ticks)
    }

    /// Advance by one tick and return the new value
    pub fn tick(&mut self) -> f64 {
        if !self.is_full() {
            self.ticks = self.ticks.saturating_add(1);
        }
        self.value()
    }

    /// Current progress, monotonic and clamped at 100
    pub fn value(&self) -> f64 {
        if self.total.is_zero() {
            return FULL;
        }
        let ratio = self.elapsed().as_secs_f64() / self.total.as_secs_f64();
        (ratio * FULL).min(FULL)
    }

    pub fn is_full(&self) -> bool {
        self.value() >= FULL
    }
}

/// Discrete index advancing once per `total / steps`, clamped at `steps - 1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepClock {
    steps: usize,
    period: Duration,
    index: usize,
}

impl StepClock {
    pub fn new(total: Duration, steps: usize) -> Self {
        let steps = steps.max(1);
        let divisor = u32::try_from(steps).unwrap_or(u32::MAX);
        Self {
            steps,
            period: (total / divisor).max(Duration::from_millis(1)),
            index: 0,
        }
    }

    /// Time between two index advances
    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance by one step, holding on the last one
    pub fn tick(&mut self) -> usize {
        if !self.is_last() {
            self.index += 1;
        }
        self.index
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_starts_at_zero() {
        let clock = ProgressClock::new(Duration::from_millis(1000), DEFAULT_TICK);
        assert_eq!(clock.value(), 0.0);
        assert!(!clock.is_full());
    }

    #[test]
    fn test_progress_reaches_full_at_total_duration() {
        let mut clock = ProgressClock::new(Duration::from_millis(1000), DEFAULT_TICK);

        for _ in 0..19 {
            clock.tick();
        }
        assert!(!clock.is_full());
        assert!((clock.value() - 95.0).abs() < 1e-9);

        clock.tick();
        assert!(clock.is_full());
        assert_eq!(clock.elapsed(), Duration::from_millis(1000));
    }

    #[test]
    fn test_progress_is_monotonic_and_clamped() {
        let mut clock = ProgressClock::new(Duration::from_millis(3500), DEFAULT_TICK);
        let mut last = clock.value();

        for _ in 0..200 {
            let value = clock.tick();
            assert!(value >= last);
            assert!(value <= FULL);
            last = value;
        }
        assert_eq!(last, FULL);
    }

    #[test]
    fn test_progress_stops_counting_once_full() {
        let mut clock = ProgressClock::new(Duration::from_millis(100), DEFAULT_TICK);
        for _ in 0..10 {
            clock.tick();
        }
        assert_eq!(clock.elapsed(), Duration::from_millis(100));
    }

    #[test]
    fn test_progress_with_uneven_tick_clamps() {
        // 7 ticks of 50ms overshoot 333ms; the value must still cap at 100
        let mut clock = ProgressClock::new(Duration::from_millis(333), DEFAULT_TICK);
        for _ in 0..7 {
            clock.tick();
        }
        assert_eq!(clock.value(), FULL);
    }

    #[test]
    fn test_zero_duration_is_immediately_full() {
        let clock = ProgressClock::new(Duration::ZERO, DEFAULT_TICK);
        assert!(clock.is_full());
    }

    #[test]
    fn test_step_period_divides_total() {
        let clock = StepClock::new(Duration::from_millis(1000), 5);
        assert_eq!(clock.period(), Duration::from_millis(200));
        assert_eq!(clock.index(), 0);
    }

    #[test]
    fn test_step_holds_on_last() {
        let mut clock = StepClock::new(Duration::from_millis(1000), 5);
        let seen: Vec<usize> = (0..8).map(|_| clock.tick()).collect();
        assert_eq!(seen, vec![1, 2, 3, 4, 4, 4, 4, 4]);
        assert!(clock.is_last());
    }

    #[test]
    fn test_step_reaches_last_before_total() {
        for total_ms in [500u64, 1000, 3500, 10_000] {
            let total = Duration::from_millis(total_ms);
            let mut clock = StepClock::new(total, 5);
            let mut elapsed = Duration::ZERO;
            while !clock.is_last() {
                clock.tick();
                elapsed += clock.period();
            }
            assert!(elapsed <= total, "{total_ms}ms: reached last at {elapsed:?}");
        }
    }

    #[test]
    fn test_single_step_is_already_last() {
        let clock = StepClock::new(Duration::from_millis(1000), 1);
        assert!(clock.is_last());
    }

    #[test]
    fn test_zero_steps_treated_as_one() {
        let mut clock = StepClock::new(Duration::from_millis(1000), 0);
        assert_eq!(clock.steps(), 1);
        assert_eq!(clock.tick(), 0);
    }
}
