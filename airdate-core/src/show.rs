use serde::{Deserialize, Serialize};

/// A show and the years it ran.
///
/// `end >= start` is not checked. A show announced with a single year has
/// `start == end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Show {
    pub title: String,
    pub start: i32,
    pub end: i32,
}

impl Show {
    pub fn new(title: impl Into<String>, start: i32, end: i32) -> Self {
        Self {
            title: title.into(),
            start,
            end,
        }
    }

    /// Years between start and end, used as the sort key.
    ///
    /// Widened to `i64` so extreme years can't overflow.
    pub fn duration(&self) -> i64 {
        i64::from(self.end) - i64::from(self.start)
    }

    /// Whether the show was recorded with a single year rather than a range.
    pub fn is_single_year(&self) -> bool {
        self.start == self.end
    }
}

impl std::fmt::Display for Show {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_single_year() {
            write!(f, "{} ({})", self.title, self.start)
        } else {
            write!(f, "{} ({}-{})", self.title, self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_end_minus_start() {
        assert_eq!(Show::new("Friends", 1994, 2004).duration(), 10);
        assert_eq!(Show::new("Game of Thrones", 2011, 2011).duration(), 0);
        assert_eq!(Show::new("Backwards", 2010, 2005).duration(), -5);
    }

    #[test]
    fn duration_does_not_overflow() {
        let show = Show::new("Edge", i32::MIN, i32::MAX);
        assert_eq!(show.duration(), i64::from(i32::MAX) - i64::from(i32::MIN));
    }

    #[test]
    fn display_uses_input_shapes() {
        assert_eq!(
            Show::new("The Office", 2005, 2013).to_string(),
            "The Office (2005-2013)"
        );
        assert_eq!(
            Show::new("Game of Thrones", 2011, 2011).to_string(),
            "Game of Thrones (2011)"
        );
    }
}
