//! Parse whole batches of raw records.
//!
//! The default policy is all-or-nothing: one bad record fails the batch and no
//! partial result is returned. [`parse_lenient`] and [`parse_report`] are the
//! alternative for callers that would rather keep what parsed.

use crate::error::ParseError;
use crate::outcome::{Outcome, combine};
use crate::record::{parse_record, parse_record_silent};
use crate::show::Show;

/// Parse every record, failing with the first bad record's error.
///
/// Shows come back in input order.
///
/// ```
/// use airdate_core::parse_all;
///
/// let shows = parse_all(["The Office (2005-2013)", "Breaking Bad (2008-2013)"]).unwrap();
/// assert_eq!(shows.len(), 2);
///
/// let err = parse_all(["Friends (1994-2004)", "The Simpsons, 1989-2021"]).unwrap_err();
/// assert_eq!(err.raw(), "The Simpsons, 1989-2021");
/// ```
pub fn parse_all<I>(raws: I) -> Result<Vec<Show>, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    all_or_nothing(raws, parse_record)
}

/// Parse every record, yielding `None` if any of them is malformed.
pub fn parse_all_silent<I>(raws: I) -> Option<Vec<Show>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    all_or_nothing(raws, parse_record_silent)
}

/// Parse every record, skipping the ones that fail.
pub fn parse_lenient<I>(raws: I) -> Vec<Show>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    raws.into_iter()
        .filter_map(|raw| parse_record_silent(raw.as_ref()))
        .collect()
}

/// Result of a lenient parse that keeps the reason for every rejected record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Records that parsed, in input order.
    pub shows: Vec<Show>,
    /// Errors for the records that didn't, in input order.
    pub failures: Vec<ParseError>,
}

impl ParseReport {
    /// True when no record was rejected.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Apply the all-or-nothing policy after the fact.
    pub fn into_result(self) -> Result<Vec<Show>, ParseError> {
        match self.failures.into_iter().next() {
            Some(first) => Err(first),
            None => Ok(self.shows),
        }
    }
}

/// Parse every record, keeping both the shows and the errors.
pub fn parse_report<I>(raws: I) -> ParseReport
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut report = ParseReport::default();
    for raw in raws {
        match parse_record(raw.as_ref()) {
            Ok(show) => report.shows.push(show),
            Err(e) => {
                log::debug!("skipping record: {e}");
                report.failures.push(e);
            }
        }
    }
    report
}

/// Left fold from an empty success, stopping at the first failure.
fn all_or_nothing<I, P, N, A>(raws: I, parse: P) -> A
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    P: Fn(&str) -> N,
    N: Outcome,
    A: Outcome<Value = Vec<N::Value>, Failure = N::Failure>,
{
    let mut acc = A::success(Vec::new());
    for (index, raw) in raws.into_iter().enumerate() {
        acc = combine(acc, parse(raw.as_ref()));
        if !acc.is_success() {
            log::debug!("record {index} failed to parse, discarding batch");
            break;
        }
    }
    acc
}
