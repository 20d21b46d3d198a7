//! Real-time accumulators, independent of the tick rate.

/// Fires once per `period_ms` of accumulated elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period_ms: u32,
    acc_ms: u32,
}

impl Interval {
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            acc_ms: 0,
        }
    }

    /// Add elapsed time and return how many whole periods completed.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.period_ms == 0 {
            return 0;
        }
        self.acc_ms = self.acc_ms.saturating_add(elapsed_ms);
        let fired = self.acc_ms / self.period_ms;
        self.acc_ms %= self.period_ms;
        fired
    }

    pub fn reset(&mut self) {
        self.acc_ms = 0;
    }

    /// Time accumulated towards the next period.
    pub fn pending_ms(&self) -> u32 {
        self.acc_ms
    }
}
