//! Descriptive statistics over a value stream
//!
//! Each accumulator is independent and implements
//! [`Statistic`](crate::traits::Statistic).
//!
//! # Example
//!
//! ```
//! use streamstats::statistics::{Max, Mean, Min, StdDev};
//! use streamstats::traits::Statistic;
//!
//! let mut min = Min::new();
//! let mut max = Max::new();
//! let mut mean = Mean::new();
//! let mut std = StdDev::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     min.update(value);
//!     max.update(value);
//!     mean.update(value);
//!     std.update(value);
//! }
//!
//! assert_eq!(min.evaluate(), 1.0);
//! assert_eq!(max.evaluate(), 5.0);
//! assert_eq!(mean.evaluate(), 3.0);
//! assert!((std.evaluate() - 2.0_f64.sqrt()).abs() < 1e-12);
//! ```

mod deviation;
mod extrema;
mod mean;

pub use deviation::StdDev;
pub use extrema::{Max, Min};
pub use mean::Mean;
