//! Population standard deviation over the retained history

use crate::math;
use crate::traits::Statistic;
use alloc::borrow::Cow;
use alloc::vec::Vec;

/// Population standard deviation
///
/// Keeps every observed value. Each update recomputes the exact mean of the
/// history and then `sqrt(sum((x - mean)^2) / n)`, so an update costs O(n).
///
/// # Example
///
/// ```
/// use streamstats::statistics::StdDev;
/// use streamstats::traits::Statistic;
///
/// let mut std = StdDev::new();
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     std.update(value);
/// }
/// assert!((std.evaluate() - 2.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StdDev {
    values: Vec<f64>,
    mean: f64,
    stddev: f64,
}

impl StdDev {
    /// Create a new standard deviation accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Mean of the history, as used for the last deviation
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance (the square of [`evaluate`](Statistic::evaluate))
    pub fn variance(&self) -> f64 {
        self.stddev * self.stddev
    }

    fn recompute(&mut self) {
        let n = self.values.len() as f64;
        self.mean = self.values.iter().sum::<f64>() / n;

        let squared: f64 = self
            .values
            .iter()
            .map(|&x| {
                let d = x - self.mean;
                d * d
            })
            .sum();
        self.stddev = math::sqrt(squared / n);
    }
}

impl Statistic for StdDev {
    fn update(&mut self, value: f64) {
        self.values.push(value);
        self.recompute();
    }

    fn evaluate(&self) -> f64 {
        self.stddev
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("std")
    }

    fn count(&self) -> u64 {
        self.values.len() as u64
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}
