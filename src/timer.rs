use std::time::Duration;

/// Repeating timer advanced by the host's frame delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    elapsed: Duration,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self { period, elapsed: Duration::ZERO }
    }

    /// Advances the timer by `dt` and returns how many periods completed.
    pub fn tick(&mut self, dt: Duration) -> usize {
        if self.period.is_zero() {
            return 0;
        }

        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }
}
