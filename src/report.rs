//! Snapshot of accumulator results and their text rendering

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Significant digits used when rendering values
const PRECISION: usize = 6;

/// One reported statistic
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry {
    /// Label, e.g. `min` or `pct90`
    pub name: String,
    /// Value at the time of the snapshot
    pub value: f64,
}

/// Ordered results of a [`StatisticSet`](crate::registry::StatisticSet)
///
/// `Display` renders one `"<name> = <value>"` line per entry.
///
/// ```
/// use streamstats::report::{Entry, Report};
///
/// let report = Report::new(vec![
///     Entry { name: "min".into(), value: 1.0 },
///     Entry { name: "std".into(), value: 2.0_f64.sqrt() },
/// ]);
/// assert_eq!(report.to_string(), "min = 1\nstd = 1.41421\n");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Report {
    entries: Vec<Entry>,
}

impl Report {
    /// Build a report from entries in print order
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Entries in print order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up a value by label
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the report has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, format_general(self.value))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Render a value in `%g` style with six significant digits
///
/// Trailing zeros are dropped. Values with a decimal exponent below -4 or
/// at least 6 use scientific notation with a signed, two-digit minimum
/// exponent.
///
/// ```
/// use streamstats::report::format_general;
///
/// assert_eq!(format_general(3.0), "3");
/// assert_eq!(format_general(2.0_f64.sqrt()), "1.41421");
/// assert_eq!(format_general(f64::MAX), "1.79769e+308");
/// assert_eq!(format_general(0.00001), "1e-05");
/// ```
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }

    // Round to the target precision first; the exponent may shift (9.999995 -> 1e1)
    let scientific = alloc::format!("{:.*e}", PRECISION - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific.clone();
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        alloc::format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION as i32 - 1 - exponent) as usize;
        let fixed = alloc::format!("{:.*}", decimals, value);
        String::from(trim_fraction(&fixed))
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_integers() {
        assert_eq!(format_general(1.0), "1");
        assert_eq!(format_general(5.0), "5");
        assert_eq!(format_general(-42.0), "-42");
        assert_eq!(format_general(100000.0), "100000");
        assert_eq!(format_general(1000000.0), "1e+06");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_general(1.5), "1.5");
        assert_eq!(format_general(0.1), "0.1");
        assert_eq!(format_general(0.0001), "0.0001");
        assert_eq!(format_general(0.00012345678), "0.000123457");
        assert_eq!(format_general(3.14159265), "3.14159");
        assert_eq!(format_general(123456.7), "123457");
    }

    #[test]
    fn test_rounding_carries_exponent() {
        assert_eq!(format_general(9.9999996), "10");
        assert_eq!(format_general(999999.7), "1e+06");
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(format_general(f64::MAX), "1.79769e+308");
        assert_eq!(format_general(f64::MIN), "-1.79769e+308");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(-0.0), "-0");
        assert_eq!(format_general(f64::INFINITY), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_general(f64::NAN), "nan");
    }

    #[test]
    fn test_small_scientific() {
        assert_eq!(format_general(0.00001), "1e-05");
        assert_eq!(format_general(-2.5e-10), "-2.5e-10");
    }

    #[test]
    fn test_report_display_and_lookup() {
        let report = Report::new(vec![
            Entry {
                name: "min".into(),
                value: 1.0,
            },
            Entry {
                name: "pct90".into(),
                value: 5.0,
            },
        ]);

        assert_eq!(report.to_string(), "min = 1\npct90 = 5\n");
        assert_eq!(report.get("pct90"), Some(5.0));
        assert_eq!(report.get("pct50"), None);
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_empty_report() {
        let report = Report::default();
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "");
    }
}
