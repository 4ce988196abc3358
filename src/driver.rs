//! End-to-end pipeline: read values, update accumulators, print the report

use crate::error::{Result, StatsError};
use crate::input::Values;
use crate::registry::StatisticSet;
use crate::report::Report;
use std::io::{BufRead, Write};

/// Feed every value in `input` to `set`
///
/// Stops at the first malformed token or read failure. Values read before
/// the failure have already been applied to `set`.
pub fn consume<R: BufRead>(input: R, set: &mut StatisticSet) -> Result<u64> {
    let mut read = 0;
    for value in Values::new(input) {
        let value = value?;
        tracing::trace!(value, "update");
        set.update(value);
        read += 1;
    }
    Ok(read)
}

/// Summarize `input` with the standard statistic set and write the report
///
/// Nothing is written unless the whole input was read successfully.
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// streamstats::run("1 2 3 4 5".as_bytes(), &mut out).unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "min = 1\nmax = 5\nmean = 3\nstd = 1.41421\npct90 = 5\npct95 = 5\n"
/// );
/// ```
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<Report> {
    let mut set = StatisticSet::standard();
    tracing::debug!(statistics = set.len(), "reading values");

    let read = consume(input, &mut set)?;
    if read == 0 {
        tracing::info!("no values read, reporting initial accumulator state");
    } else {
        tracing::debug!(values = read, "end of input");
    }

    let report = set.report();
    write!(output, "{}", report).map_err(StatsError::Output)?;
    output.flush().map_err(StatsError::Output)?;
    Ok(report)
}
