//! Core trait for streaming accumulators
//!
//! Every statistic implements [`Statistic`], so a driver can hold a
//! heterogeneous, ordered set of them and feed each value to all of them.

use alloc::borrow::Cow;
use core::fmt::Debug;

/// A stateful accumulator updated one value at a time
///
/// The trait is object safe; drivers keep accumulators as
/// `Box<dyn Statistic>` and dispatch dynamically.
///
/// # Example
///
/// ```
/// use streamstats::statistics::Max;
/// use streamstats::traits::Statistic;
///
/// let mut max = Max::new();
/// for value in [3.0, 7.5, -1.0] {
///     max.update(value);
/// }
/// assert_eq!(max.evaluate(), 7.5);
/// assert_eq!(max.name(), "max");
/// ```
pub trait Statistic: Debug + Send {
    /// Feed the next value of the stream
    fn update(&mut self, value: f64);

    /// Current value of the statistic
    ///
    /// Before the first update this returns the accumulator's initial
    /// state (a sentinel for min/max, zero otherwise).
    fn evaluate(&self) -> f64;

    /// Label printed next to the value
    fn name(&self) -> Cow<'static, str>;

    /// Number of values seen
    fn count(&self) -> u64;

    /// Reset to the state of a freshly constructed accumulator
    fn clear(&mut self);

    /// Check if no value has been seen yet
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl<S: Statistic + ?Sized> Statistic for alloc::boxed::Box<S> {
    fn update(&mut self, value: f64) {
        (**self).update(value);
    }

    fn evaluate(&self) -> f64 {
        (**self).evaluate()
    }

    fn name(&self) -> Cow<'static, str> {
        (**self).name()
    }

    fn count(&self) -> u64 {
        (**self).count()
    }

    fn clear(&mut self) {
        (**self).clear();
    }
}
