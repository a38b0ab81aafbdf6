use std::cmp::Reverse;

use crate::show::Show;

/// Order shows from longest to shortest run.
///
/// Returns a new vector and leaves `shows` untouched. Shows with the same
/// duration keep their relative input order.
///
/// ```
/// use airdate_core::{sort_by_duration_descending, Show};
///
/// let shows = [Show::new("Short", 2008, 2013), Show::new("Long", 1989, 2021)];
/// let sorted = sort_by_duration_descending(&shows);
/// assert_eq!(sorted[0].title, "Long");
/// ```
pub fn sort_by_duration_descending(shows: &[Show]) -> Vec<Show> {
    let mut sorted = shows.to_vec();
    // sort_by_key is stable, so equal durations stay in input order.
    sorted.sort_by_key(|show| Reverse(show.duration()));
    sorted
}
