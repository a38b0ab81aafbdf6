//! Field extractors for broadcast-period strings.
//!
//! Records follow one of these shapes:
//! ```text
//! The Office (2005-2013)
//! Game of Thrones (2011)
//! ```
//!
//! Each extractor is independent of the others and only looks at the first
//! occurrence of `(`, `)` and `-`. For every delimiter pair the same rule
//! applies: both delimiters must be present, the second must come after the
//! first, and there must be something between them.

use crate::error::{Field, ParseError};

const OPEN: char = '(';
const CLOSE: char = ')';
const HYPHEN: char = '-';

/// Extract the title: everything before the first `(`, with trailing
/// whitespace and punctuation removed.
///
/// ```
/// use airdate_core::extract::title;
///
/// assert_eq!(title("Friends (1994-2004)").unwrap(), "Friends");
/// assert!(title("(1994-2004)").is_err());
/// ```
pub fn title(raw: &str) -> Result<String, ParseError> {
    match raw.find(OPEN) {
        Some(open) if open > 0 => {
            let title = raw[..open].trim_end_matches(is_trailing_noise);
            if title.is_empty() {
                Err(ParseError::missing_title(raw))
            } else {
                Ok(title.to_string())
            }
        }
        _ => Err(ParseError::missing_title(raw)),
    }
}

/// Extract the start of a bracketed range: the text between `(` and `-`.
pub fn start_year(raw: &str) -> Result<i32, ParseError> {
    let open = locate(raw, OPEN, Field::StartYear)?;
    let hyphen = locate(raw, HYPHEN, Field::StartYear)?;
    year_between(raw, Field::StartYear, open, hyphen)
}

/// Extract the end of a bracketed range: the text between `-` and `)`.
pub fn end_year(raw: &str) -> Result<i32, ParseError> {
    let hyphen = locate(raw, HYPHEN, Field::EndYear)?;
    let close = locate(raw, CLOSE, Field::EndYear)?;
    year_between(raw, Field::EndYear, hyphen, close)
}

/// Extract a lone bracketed year such as `(2011)`.
///
/// Fails when the record contains a `-` anywhere, since that marks a range.
pub fn single_year(raw: &str) -> Result<i32, ParseError> {
    if raw.contains(HYPHEN) {
        return Err(ParseError::hyphen_present(raw));
    }
    let open = locate(raw, OPEN, Field::SingleYear)?;
    let close = locate(raw, CLOSE, Field::SingleYear)?;
    year_between(raw, Field::SingleYear, open, close)
}

fn is_trailing_noise(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation()
}

fn locate(raw: &str, delimiter: char, field: Field) -> Result<usize, ParseError> {
    raw.find(delimiter)
        .ok_or_else(|| ParseError::missing_delimiter(raw, field, delimiter))
}

/// Parse the year strictly between two single-byte delimiters.
fn year_between(raw: &str, field: Field, open: usize, close: usize) -> Result<i32, ParseError> {
    if close <= open {
        return Err(ParseError::misordered(raw, field));
    }

    let slice = raw[open + 1..close].trim();
    if slice.is_empty() {
        return Err(ParseError::empty_slice(raw, field));
    }

    slice
        .parse::<i32>()
        .map_err(|source| ParseError::InvalidYear {
            raw: raw.to_string(),
            field,
            slice: slice.to_string(),
            source,
        })
}
