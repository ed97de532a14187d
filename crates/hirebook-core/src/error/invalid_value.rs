use super::Error;
use crate::stmt::Type;

/// Error when an update value does not fit the column it is assigned to.
#[derive(Debug)]
pub(super) struct InvalidValueError {
    resource: &'static str,
    field: &'static str,
    expected: Type,
    actual: &'static str,
}

impl std::error::Error for InvalidValueError {}

impl core::fmt::Display for InvalidValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid value for `{}` on {}: expected {}, got {}",
            self.field,
            self.resource,
            self.expected.name(),
            self.actual
        )
    }
}

impl Error {
    pub fn invalid_value(
        resource: &'static str,
        field: &'static str,
        expected: Type,
        actual: &'static str,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidValue(InvalidValueError {
            resource,
            field,
            expected,
            actual,
        }))
    }

    pub fn is_invalid_value(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidValue(_))
    }
}
