//! Arithmetic mean

use crate::traits::Statistic;
use alloc::borrow::Cow;

/// Running arithmetic mean from a count and a running sum
///
/// The mean is recomputed as `sum / count` on every update. This is the
/// naive formulation; very long streams of large values lose precision
/// in the sum, where Welford's update would not.
#[derive(Clone, Debug, Default)]
pub struct Mean {
    mean: f64,
    sum: f64,
    count: u64,
}

impl Mean {
    /// Create a new mean accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all values seen
    pub fn sum(&self) -> f64 {
        self.sum
    }
}

impl Statistic for Mean {
    fn update(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.mean = self.sum / self.count as f64;
    }

    fn evaluate(&self) -> f64 {
        self.mean
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("mean")
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}
