//! Error types for reading and summarizing a value stream

#[cfg(not(feature = "std"))]
use alloc::string::String;

use thiserror::Error;

/// Errors produced while building accumulators or consuming input
#[derive(Debug, Error)]
pub enum StatsError {
    /// A token in the input could not be read as a finite number
    #[error("malformed value {token:?} on line {line}")]
    Malformed {
        /// The offending token, as read
        token: String,
        /// 1-based line number the token was found on
        line: usize,
    },
    /// Reading the input failed, including input that is not UTF-8
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Writing the report failed
    #[cfg(feature = "std")]
    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),
    /// Percentile accumulators accept whole percentages in 1..=100
    #[error("percentile must be in 1..=100, got {0}")]
    InvalidPercentile(u8),
}

impl StatsError {
    /// Whether the failure came from the data stream rather than from
    /// how the accumulators were set up
    pub fn is_input_error(&self) -> bool {
        match self {
            StatsError::Malformed { .. } => true,
            #[cfg(feature = "std")]
            StatsError::Io(_) => true,
            #[cfg(feature = "std")]
            StatsError::Output(_) => false,
            StatsError::InvalidPercentile(_) => false,
        }
    }
}

/// Convenience alias used across the crate
pub type Result<T> = core::result::Result<T, StatsError>;
