/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The backing store could not be reached or read.
    #[error("repository.unavailable")]
    Unavailable,
    /// The backing store was read but its contents are unusable.
    #[error("repository.corrupted")]
    Corrupted,
}

impl RepositoryError {
    pub fn unavailable() -> Self {
        RepositoryError::Unavailable
    }
    pub fn corrupted() -> Self {
        RepositoryError::Corrupted
    }
}
