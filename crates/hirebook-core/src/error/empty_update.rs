use super::Error;

/// Error when a partial update carries no fields.
#[derive(Debug)]
pub(super) struct EmptyUpdateError;

impl std::error::Error for EmptyUpdateError {}

impl core::fmt::Display for EmptyUpdateError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no data to update")
    }
}

impl Error {
    pub fn empty_update() -> Error {
        Error::from(super::ErrorKind::EmptyUpdate(EmptyUpdateError))
    }

    pub fn is_empty_update(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EmptyUpdate(_))
    }
}
