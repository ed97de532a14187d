use super::Error;

/// Error when the lower bound of a filter pair exceeds its upper bound.
#[derive(Debug)]
pub(super) struct InvalidFilterRangeError {
    field: Box<str>,
    min: i64,
    max: i64,
}

impl std::error::Error for InvalidFilterRangeError {}

impl core::fmt::Display for InvalidFilterRangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid filter range: min {field} ({}) cannot be greater than max {field} ({})",
            self.min,
            self.max,
            field = self.field,
        )
    }
}

impl Error {
    pub fn invalid_filter_range(field: impl Into<String>, min: i64, max: i64) -> Error {
        Error::from(super::ErrorKind::InvalidFilterRange(
            InvalidFilterRangeError {
                field: field.into().into(),
                min,
                max,
            },
        ))
    }

    pub fn is_invalid_filter_range(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidFilterRange(_))
    }
}
