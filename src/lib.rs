//! # Streamstats
//!
//! Incremental descriptive statistics over a stream of numbers.
//!
//! Every statistic is an accumulator implementing
//! [`Statistic`](traits::Statistic): it is updated once per value and can be
//! evaluated at any point. A [`StatisticSet`](registry::StatisticSet) feeds
//! the same stream to several accumulators in a fixed order.
//!
//! ## Statistics
//!
//! - **Extremes**: [`Min`](statistics::Min), [`Max`](statistics::Max)
//! - **Moments**: [`Mean`](statistics::Mean), population
//!   [`StdDev`](statistics::StdDev)
//! - **Percentiles**: nearest-rank [`Percentile`](quantiles::Percentile) and
//!   the heap-based [`StreamingPercentile`](quantiles::StreamingPercentile)
//!
//! ## Quick Start
//!
//! ```rust
//! use streamstats::prelude::*;
//!
//! let mut set = StatisticSet::standard();
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     set.update(value);
//! }
//!
//! print!("{}", set.report());
//! // min = 1
//! // max = 5
//! // mean = 3
//! // std = 1.41421
//! // pct90 = 5
//! // pct95 = 5
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): reading from `std::io`, the `streamstats` binary and
//!   logging through `tracing`. Without it the accumulators build on
//!   `core` + `alloc` and use `libm` for math.
//! - `serde`: `Serialize` for [`Report`](report::Report)

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod math;

pub mod error;
pub mod quantiles;
pub mod registry;
pub mod report;
pub mod statistics;
pub mod traits;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod input;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod driver;

pub mod prelude {
    pub use crate::error::StatsError;
    pub use crate::quantiles::{Percentile, StreamingPercentile};
    pub use crate::registry::StatisticSet;
    pub use crate::report::Report;
    pub use crate::statistics::{Max, Mean, Min, StdDev};
    pub use crate::traits::Statistic;
}

pub use error::StatsError;
pub use registry::StatisticSet;

#[cfg(feature = "std")]
pub use driver::run;
