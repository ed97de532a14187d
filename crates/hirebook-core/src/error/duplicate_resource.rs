use super::Error;

/// Error when a create would collide with an existing natural key.
#[derive(Debug)]
pub(super) struct DuplicateResourceError {
    context: Box<str>,
}

impl std::error::Error for DuplicateResourceError {}

impl core::fmt::Display for DuplicateResourceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.context)
    }
}

impl Error {
    pub fn duplicate_resource(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateResource(DuplicateResourceError {
            context: context.into().into(),
        }))
    }

    pub fn is_duplicate_resource(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateResource(_))
    }
}
