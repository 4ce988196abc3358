//! Nearest-rank percentiles
//!
//! This module provides two accumulators that select an observed value at a
//! computed rank, without interpolation between neighbors.
//!
//! # Algorithms
//!
//! - [`Percentile`]: keeps the whole history and re-sorts on every update
//! - [`StreamingPercentile`]: two heaps split at the selected rank
//!
//! # Example
//!
//! ```
//! use streamstats::quantiles::{nearest_rank, Percentile};
//! use streamstats::traits::Statistic;
//!
//! let mut p95 = Percentile::new(95).unwrap();
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     p95.update(value);
//! }
//!
//! assert_eq!(nearest_rank(95, 5), 4);
//! assert_eq!(p95.evaluate(), 5.0);
//! ```

mod percentile;
mod streaming;

pub use percentile::Percentile;
pub use streaming::StreamingPercentile;

use crate::error::{Result, StatsError};

/// 0-based index of the nearest-rank `percent` percentile among `n`
/// sorted values
///
/// Computes `ceil(percent * n / 100) - 1`, clamped into `[0, n - 1]`.
/// Returns 0 when `n` is 0.
pub fn nearest_rank(percent: u8, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let scaled = u128::from(percent) * n as u128;
    let rank = scaled.div_ceil(100) as usize;
    rank.saturating_sub(1).min(n - 1)
}

fn check_percentile(percent: u8) -> Result<()> {
    if (1..=100).contains(&percent) {
        Ok(())
    } else {
        Err(StatsError::InvalidPercentile(percent))
    }
}
