use thiserror::Error;

/// Everything the storage, validation and pagination layers can hand back to
/// a caller. Store errors convert via `From` so no raw diesel error crosses
/// the service boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("that record does not exist")]
    NotFound,
    #[error("identifier must be a whole number")]
    InvalidIdentifier,
    #[error("must be between 1 and 100 characters")]
    InvalidLength,
    #[error("must be a whole number")]
    NotAWholeNumber,
    #[error("that name is already taken")]
    DuplicateName,
    #[error("page must be a non-negative whole number")]
    InvalidPage,
    #[error("storage failure: {0}")]
    StorageFailure(#[from] diesel::result::Error),
    #[error("could not connect to the database: {0}")]
    ConnectionFailure(#[from] diesel::ConnectionError),
}

impl Error {
    /// Recoverable at the request boundary: the caller re-prompts or serves
    /// a not-found page instead of failing the request outright.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Error::StorageFailure(_) | Error::ConnectionFailure(_)
        )
    }
}
