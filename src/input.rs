//! Whitespace-separated numbers from a reader

use crate::error::{Result, StatsError};
use std::io::BufRead;
use std::vec::IntoIter;

/// Iterator over the numbers in a text stream
///
/// Tokens are split on ASCII whitespace across lines. Each token must parse
/// as a finite `f64`. The first malformed token or read failure is yielded as
/// an error, after which the iterator is exhausted.
///
/// # Example
///
/// ```
/// use streamstats::input::Values;
///
/// let values: Result<Vec<f64>, _> = Values::new("1 2.5\n-3e2\n".as_bytes()).collect();
/// assert_eq!(values.unwrap(), [1.0, 2.5, -300.0]);
///
/// let mut bad = Values::new("1 2 x".as_bytes());
/// assert_eq!(bad.next().unwrap().unwrap(), 1.0);
/// assert_eq!(bad.next().unwrap().unwrap(), 2.0);
/// assert!(bad.next().unwrap().is_err());
/// assert!(bad.next().is_none());
/// ```
#[derive(Debug)]
pub struct Values<R> {
    reader: R,
    buffer: String,
    pending: IntoIter<String>,
    line: usize,
    done: bool,
}

impl<R: BufRead> Values<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            pending: Vec::new().into_iter(),
            line: 0,
            done: false,
        }
    }

    /// 1-based number of the line most recently read
    pub fn line(&self) -> usize {
        self.line
    }

    /// Read lines until one holds at least one token; false at end of input
    fn refill(&mut self) -> Result<bool> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(false);
            }
            self.line += 1;

            let tokens: Vec<String> = self
                .buffer
                .split_ascii_whitespace()
                .map(String::from)
                .collect();
            tracing::trace!(line = self.line, tokens = tokens.len(), "read line");

            if !tokens.is_empty() {
                self.pending = tokens.into_iter();
                return Ok(true);
            }
        }
    }
}

impl<R: BufRead> Iterator for Values<R> {
    type Item = Result<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let token = match self.pending.next() {
            Some(token) => token,
            None => match self.refill() {
                Ok(true) => self.pending.next()?,
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            },
        };

        match parse_value(&token) {
            Some(value) => Some(Ok(value)),
            None => {
                tracing::debug!(token = %token, line = self.line, "malformed value");
                self.done = true;
                Some(Err(StatsError::Malformed {
                    token,
                    line: self.line,
                }))
            }
        }
    }
}

/// Parse one token, accepting only finite numbers
pub fn parse_value(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    fn collect(text: &str) -> Result<Vec<f64>> {
        Values::new(text.as_bytes()).collect()
    }

    #[test]
    fn test_whitespace_and_lines() {
        let values = collect("  1\t2\n\n 3   4\r\n5").unwrap();
        assert_eq!(values, [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_unicode_space_is_not_a_separator() {
        assert!(collect("1\u{a0}2").is_err());
        assert!(collect("1\u{2003}2").is_err());
    }

    #[test]
    fn test_number_forms() {
        let values = collect("+7 -0.5 1e3 .25 3.").unwrap();
        assert_eq!(values, [7.0, -0.5, 1000.0, 0.25, 3.0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(collect("").unwrap().is_empty());
        assert!(collect(" \n\t\n").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_stops_iteration() {
        let mut values = Values::new("1 2 x 4".as_bytes());

        assert_eq!(values.next().unwrap().unwrap(), 1.0);
        assert_eq!(values.next().unwrap().unwrap(), 2.0);
        match values.next() {
            Some(Err(StatsError::Malformed { token, line })) => {
                assert_eq!(token, "x");
                assert_eq!(line, 1);
            }
            other => panic!("expected malformed token, got {:?}", other),
        }
        assert!(values.next().is_none());
    }

    #[test]
    fn test_line_tracks_blank_lines() {
        let mut values = Values::new("\n7\n\n\n8 9\n".as_bytes());
        assert_eq!(values.line(), 0);

        assert_eq!(values.next().unwrap().unwrap(), 7.0);
        assert_eq!(values.line(), 2);

        assert_eq!(values.next().unwrap().unwrap(), 8.0);
        assert_eq!(values.next().unwrap().unwrap(), 9.0);
        assert_eq!(values.line(), 5);

        assert!(values.next().is_none());
        assert_eq!(values.line(), 5);
    }

    #[test]
    fn test_malformed_line_number() {
        let err = collect("1\n2\n3 oops\n").unwrap_err();
        assert!(matches!(err, StatsError::Malformed { line: 3, .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(collect("1 nan").is_err());
        assert!(collect("inf").is_err());
        assert!(collect("-infinity").is_err());
        assert!(collect("1e400").is_err());
    }

    #[test]
    fn test_partial_number_rejected() {
        assert!(collect("3abc").is_err());
        assert!(collect("1,5").is_err());
        assert!(collect("1-2").is_err());
        assert!(collect("1.5.5").is_err());
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let bytes: &[u8] = &[b'1', b' ', 0xff, 0xfe, b'\n'];
        let err = Values::new(bytes).collect::<Result<Vec<f64>>>().unwrap_err();
        assert!(matches!(err, StatsError::Io(_)));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }

    #[test]
    fn test_read_failure() {
        let mut values = Values::new(io::BufReader::new(FailingReader));
        assert!(matches!(values.next(), Some(Err(StatsError::Io(_)))));
        assert!(values.next().is_none());
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("42"), Some(42.0));
        assert_eq!(parse_value("-1.5e-3"), Some(-0.0015));
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value(""), None);
    }
}
