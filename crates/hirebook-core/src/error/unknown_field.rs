use super::Error;

/// Error when an update key is not part of a resource's column mapping.
#[derive(Debug)]
pub(super) struct UnknownFieldError {
    resource: &'static str,
    field: Box<str>,
}

impl std::error::Error for UnknownFieldError {}

impl core::fmt::Display for UnknownFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown field `{}` for {}", self.field, self.resource)
    }
}

impl Error {
    pub fn unknown_field(resource: &'static str, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownField(UnknownFieldError {
            resource,
            field: field.into().into(),
        }))
    }

    pub fn is_unknown_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownField(_))
    }
}
