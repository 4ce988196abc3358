//! Minimum and maximum accumulators

use crate::traits::Statistic;
use alloc::borrow::Cow;

/// Smallest value seen so far
///
/// Starts at `f64::MAX`, which is what an empty stream reports.
///
/// # Example
///
/// ```
/// use streamstats::statistics::Min;
/// use streamstats::traits::Statistic;
///
/// let mut min = Min::new();
/// assert_eq!(min.evaluate(), f64::MAX);
///
/// for value in [4.0, -2.5, 9.0] {
///     min.update(value);
/// }
/// assert_eq!(min.evaluate(), -2.5);
/// ```
#[derive(Clone, Debug)]
pub struct Min {
    min: f64,
    count: u64,
}

impl Default for Min {
    fn default() -> Self {
        Self::new()
    }
}

impl Min {
    /// Create a new minimum accumulator
    pub fn new() -> Self {
        Self {
            min: f64::MAX,
            count: 0,
        }
    }

    /// Minimum, or `None` if nothing was seen
    pub fn get(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.min)
        }
    }
}

impl Statistic for Min {
    fn update(&mut self, value: f64) {
        self.count += 1;
        if value < self.min {
            self.min = value;
        }
    }

    fn evaluate(&self) -> f64 {
        self.min
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("min")
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}

/// Largest value seen so far
///
/// Starts at `f64::MIN` (the lowest finite value, not zero), so streams of
/// negative numbers report their true maximum.
#[derive(Clone, Debug)]
pub struct Max {
    max: f64,
    count: u64,
}

impl Default for Max {
    fn default() -> Self {
        Self::new()
    }
}

impl Max {
    /// Create a new maximum accumulator
    pub fn new() -> Self {
        Self {
            max: f64::MIN,
            count: 0,
        }
    }

    /// Maximum, or `None` if nothing was seen
    pub fn get(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.max)
        }
    }
}

impl Statistic for Max {
    fn update(&mut self, value: f64) {
        self.count += 1;
        if value > self.max {
            self.max = value;
        }
    }

    fn evaluate(&self) -> f64 {
        self.max
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("max")
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}
