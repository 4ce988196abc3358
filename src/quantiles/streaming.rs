//! Incremental nearest-rank percentile using two heaps
//!
//! The lowest `k` values live in a max-heap and the rest in a min-heap,
//! where `k` is the nearest rank for the current count. The answer is the
//! top of the max-heap. Since `k` never moves by more than one position per
//! insert, rebalancing moves at most a couple of elements.

use super::{check_percentile, nearest_rank};
use crate::error::Result;
use crate::traits::Statistic;
use alloc::borrow::Cow;
use alloc::collections::BinaryHeap;
use core::cmp::{Ordering, Reverse};

/// `f64` with the IEEE total order, so it can live in a `BinaryHeap`
#[derive(Clone, Copy, Debug)]
struct Ordered(f64);

impl PartialEq for Ordered {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ordered {}

impl PartialOrd for Ordered {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ordered {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Nearest-rank percentile in O(log n) per update
///
/// Produces exactly the same value as [`Percentile`](super::Percentile)
/// after every update, but without re-sorting the history.
///
/// # Example
///
/// ```
/// use streamstats::quantiles::StreamingPercentile;
/// use streamstats::traits::Statistic;
///
/// let mut p95 = StreamingPercentile::new(95).unwrap();
/// for value in (1..=100).rev() {
///     p95.update(value as f64);
/// }
/// assert_eq!(p95.evaluate(), 95.0);
/// ```
#[derive(Clone, Debug)]
pub struct StreamingPercentile {
    percent: u8,
    /// Values at or below the selected rank; top is the answer
    lower: BinaryHeap<Ordered>,
    /// Values above the selected rank
    upper: BinaryHeap<Reverse<Ordered>>,
}

impl StreamingPercentile {
    /// Create a percentile accumulator for `percent` in 1..=100
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidPercentile`](crate::StatsError::InvalidPercentile)
    /// for 0 or anything above 100.
    pub fn new(percent: u8) -> Result<Self> {
        check_percentile(percent)?;
        Ok(Self {
            percent,
            lower: BinaryHeap::new(),
            upper: BinaryHeap::new(),
        })
    }

    /// The percentage this accumulator tracks
    pub fn percent(&self) -> u8 {
        self.percent
    }

    fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    fn rebalance(&mut self) {
        let target = nearest_rank(self.percent, self.len()) + 1;

        while self.lower.len() > target {
            if let Some(top) = self.lower.pop() {
                self.upper.push(Reverse(top));
            }
        }
        while self.lower.len() < target {
            match self.upper.pop() {
                Some(Reverse(bottom)) => self.lower.push(bottom),
                None => break,
            }
        }
    }
}

impl Statistic for StreamingPercentile {
    fn update(&mut self, value: f64) {
        let value = Ordered(value);
        if self.lower.peek().is_some_and(|top| value > *top) {
            self.upper.push(Reverse(value));
        } else {
            self.lower.push(value);
        }
        self.rebalance();
    }

    fn evaluate(&self) -> f64 {
        self.lower.peek().map_or(0.0, |top| top.0)
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(alloc::format!("pct{}", self.percent))
    }

    fn count(&self) -> u64 {
        self.len() as u64
    }

    fn clear(&mut self) {
        self.lower.clear();
        self.upper.clear();
    }
}
