//! Nearest-rank percentile over a fully retained, re-sorted history

use super::{check_percentile, nearest_rank};
use crate::error::Result;
use crate::traits::Statistic;
use alloc::borrow::Cow;
use alloc::vec::Vec;

/// Exact nearest-rank percentile
///
/// Every value is kept. Each update appends, sorts the whole history and
/// selects the element at `clamp(ceil(p * n / 100) - 1, 0, n - 1)`. That is
/// O(n log n) per update; see
/// [`StreamingPercentile`](super::StreamingPercentile) for the O(log n)
/// variant with identical results.
///
/// # Example
///
/// ```
/// use streamstats::quantiles::Percentile;
/// use streamstats::traits::Statistic;
///
/// let mut p90 = Percentile::new(90).unwrap();
/// for value in 1..=10 {
///     p90.update(value as f64);
/// }
/// assert_eq!(p90.evaluate(), 9.0);
/// assert_eq!(p90.name(), "pct90");
/// ```
#[derive(Clone, Debug)]
pub struct Percentile {
    percent: u8,
    /// History, sorted ascending after every update
    values: Vec<f64>,
    selected: f64,
}

impl Percentile {
    /// Create a percentile accumulator for `percent` in 1..=100
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidPercentile`](crate::StatsError::InvalidPercentile)
    /// for 0 or anything above 100.
    pub fn new(percent: u8) -> Result<Self> {
        check_percentile(percent)?;
        Ok(Self::with_percent(percent))
    }

    /// 90th percentile
    pub fn p90() -> Self {
        Self::with_percent(90)
    }

    /// 95th percentile
    pub fn p95() -> Self {
        Self::with_percent(95)
    }

    fn with_percent(percent: u8) -> Self {
        Self {
            percent,
            values: Vec::new(),
            selected: 0.0,
        }
    }

    /// The percentage this accumulator tracks
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Sorted history
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl Statistic for Percentile {
    fn update(&mut self, value: f64) {
        self.values.push(value);
        self.values.sort_by(f64::total_cmp);
        self.selected = self.values[nearest_rank(self.percent, self.values.len())];
    }

    fn evaluate(&self) -> f64 {
        self.selected
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(alloc::format!("pct{}", self.percent))
    }

    fn count(&self) -> u64 {
        self.values.len() as u64
    }

    fn clear(&mut self) {
        self.values.clear();
        self.selected = 0.0;
    }
}
