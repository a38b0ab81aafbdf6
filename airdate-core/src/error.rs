use std::fmt;
use std::num::ParseIntError;

/// The logical field an extractor is trying to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    StartYear,
    EndYear,
    SingleYear,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::StartYear => "start year",
            Self::EndYear => "end year",
            Self::SingleYear => "single year",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a raw record could not be turned into a field or a [`Show`](crate::Show).
///
/// Every variant keeps the offending raw string so a message can be shown to
/// a user without any extra context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("could not read title from {raw:?}: expected text before '('")]
    MissingTitle { raw: String },

    #[error("could not read {field} from {raw:?}: no '{delimiter}' found")]
    MissingDelimiter {
        raw: String,
        field: Field,
        delimiter: char,
    },

    #[error("could not read single year from {raw:?}: '-' present, looks like a range")]
    HyphenPresent { raw: String },

    #[error("could not read {field} from {raw:?}: delimiters out of order")]
    Misordered { raw: String, field: Field },

    #[error("could not read {field} from {raw:?}: nothing between delimiters")]
    EmptySlice { raw: String, field: Field },

    #[error("could not read {field} from {raw:?}: {slice:?} is not a year")]
    InvalidYear {
        raw: String,
        field: Field,
        slice: String,
        #[source]
        source: ParseIntError,
    },
}

impl ParseError {
    pub fn missing_title(raw: impl Into<String>) -> Self {
        Self::MissingTitle { raw: raw.into() }
    }

    pub fn missing_delimiter(raw: impl Into<String>, field: Field, delimiter: char) -> Self {
        Self::MissingDelimiter {
            raw: raw.into(),
            field,
            delimiter,
        }
    }

    pub fn hyphen_present(raw: impl Into<String>) -> Self {
        Self::HyphenPresent { raw: raw.into() }
    }

    pub fn misordered(raw: impl Into<String>, field: Field) -> Self {
        Self::Misordered {
            raw: raw.into(),
            field,
        }
    }

    pub fn empty_slice(raw: impl Into<String>, field: Field) -> Self {
        Self::EmptySlice {
            raw: raw.into(),
            field,
        }
    }

    /// The raw record that failed to parse.
    pub fn raw(&self) -> &str {
        match self {
            Self::MissingTitle { raw }
            | Self::MissingDelimiter { raw, .. }
            | Self::HyphenPresent { raw }
            | Self::Misordered { raw, .. }
            | Self::EmptySlice { raw, .. }
            | Self::InvalidYear { raw, .. } => raw,
        }
    }

    /// The field that could not be resolved.
    pub fn field(&self) -> Field {
        match self {
            Self::MissingTitle { .. } => Field::Title,
            Self::HyphenPresent { .. } => Field::SingleYear,
            Self::MissingDelimiter { field, .. }
            | Self::Misordered { field, .. }
            | Self::EmptySlice { field, .. }
            | Self::InvalidYear { field, .. } => *field,
        }
    }
}
