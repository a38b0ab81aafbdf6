//! Assemble a [`Show`] from the individual field extractors.

use crate::error::ParseError;
use crate::extract::{end_year, single_year, start_year, title};
use crate::outcome::or_else;
use crate::show::Show;

/// Parse one raw record, reporting why it failed.
///
/// Fields are resolved in order title, start, end. The first failure stops
/// the parse and is returned; later fields are not attempted. Start and end
/// each fall back to a lone bracketed year.
///
/// ```
/// use airdate_core::{parse_record, Show};
///
/// let show = parse_record("Game of Thrones (2011)").unwrap();
/// assert_eq!(show, Show::new("Game of Thrones", 2011, 2011));
///
/// assert!(parse_record("The Simpsons, 1989-2021").is_err());
/// ```
pub fn parse_record(raw: &str) -> Result<Show, ParseError> {
    let title = title(raw)?;
    let start = or_else(start_year(raw), || single_year(raw))?;
    let end = or_else(end_year(raw), || single_year(raw))?;
    log::trace!("parsed {raw:?} as {title:?} {start}-{end}");
    Ok(Show { title, start, end })
}

/// Parse one raw record, discarding the reason on failure.
///
/// Follows exactly the same rules as [`parse_record`].
pub fn parse_record_silent(raw: &str) -> Option<Show> {
    let title = title(raw).ok()?;
    let start = or_else(start_year(raw).ok(), || single_year(raw).ok())?;
    let end = or_else(end_year(raw).ok(), || single_year(raw).ok())?;
    Some(Show { title, start, end })
}
