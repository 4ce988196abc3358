//! Ordered set of accumulators fed in lock-step

use crate::quantiles::Percentile;
use crate::report::{Entry, Report};
use crate::statistics::{Max, Mean, Min, StdDev};
use crate::traits::Statistic;
use alloc::boxed::Box;
use alloc::vec::Vec;

/// Accumulators in registration order
///
/// Every value goes to every accumulator, first registered first. The
/// report lists them in the same order.
///
/// # Example
///
/// ```
/// use streamstats::registry::StatisticSet;
///
/// let mut set = StatisticSet::standard();
/// set.extend([1.0, 2.0, 3.0, 4.0, 5.0]);
///
/// let report = set.report();
/// assert_eq!(report.get("mean"), Some(3.0));
/// assert_eq!(report.get("pct95"), Some(5.0));
/// ```
#[derive(Debug, Default)]
pub struct StatisticSet {
    statistics: Vec<Box<dyn Statistic>>,
    count: u64,
}

impl StatisticSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed set reported by the command line tool:
    /// min, max, mean, std, pct90, pct95
    pub fn standard() -> Self {
        Self::new()
            .with(Min::new())
            .with(Max::new())
            .with(Mean::new())
            .with(StdDev::new())
            .with(Percentile::p90())
            .with(Percentile::p95())
    }

    /// Append an accumulator, builder style
    pub fn with<S: Statistic + 'static>(mut self, statistic: S) -> Self {
        self.push(Box::new(statistic));
        self
    }

    /// Append an accumulator
    pub fn push(&mut self, statistic: Box<dyn Statistic>) {
        self.statistics.push(statistic);
    }

    /// Feed one value to every accumulator
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        for statistic in &mut self.statistics {
            statistic.update(value);
        }
    }

    /// Number of values fed so far
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Number of registered accumulators
    pub fn len(&self) -> usize {
        self.statistics.len()
    }

    /// Check if no accumulator is registered
    pub fn is_empty(&self) -> bool {
        self.statistics.is_empty()
    }

    /// Registered accumulators in order
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Statistic + 'static)> {
        self.statistics.iter().map(|statistic| &**statistic)
    }

    /// Reset every accumulator
    pub fn clear(&mut self) {
        self.count = 0;
        for statistic in &mut self.statistics {
            statistic.clear();
        }
    }

    /// Snapshot names and current values
    pub fn report(&self) -> Report {
        Report::new(
            self.iter()
                .map(|statistic| Entry {
                    name: statistic.name().into_owned(),
                    value: statistic.evaluate(),
                })
                .collect(),
        )
    }
}

impl Extend<f64> for StatisticSet {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.update(value);
        }
    }
}
