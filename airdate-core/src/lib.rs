//! Broadcast-period record parsing.
//!
//! Turns loosely formatted strings such as `"The Office (2005-2013)"` or
//! `"Game of Thrones (2011)"` into [`Show`] records. Every operation comes in
//! two flavors: a diagnostic one returning `Result<_, ParseError>` and a
//! silent one returning `Option<_>`. Nothing in this crate prints or performs
//! I/O; callers decide how to render outcomes.

pub mod aggregate;
pub mod error;
pub mod extract;
pub mod outcome;
pub mod record;
pub mod show;
pub mod sort;

pub use aggregate::{ParseReport, parse_all, parse_all_silent, parse_lenient, parse_report};
pub use error::{Field, ParseError};
pub use outcome::{Outcome, combine, or_else};
pub use record::{parse_record, parse_record_silent};
pub use show::Show;
pub use sort::sort_by_duration_descending;
