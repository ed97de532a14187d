use super::Error;

/// Error when the access policy denies an operation.
#[derive(Debug)]
pub(super) struct UnauthorizedError {
    reason: Box<str>,
}

impl std::error::Error for UnauthorizedError {}

impl core::fmt::Display for UnauthorizedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unauthorized: {}", self.reason)
    }
}

impl Error {
    pub fn unauthorized(reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Unauthorized(UnauthorizedError {
            reason: reason.into().into(),
        }))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Unauthorized(_))
    }
}
