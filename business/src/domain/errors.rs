/// Repository errors for domain layer.
/// Variants are code-style identifiers so they can be translated by clients.
///
/// A lookup that matches nothing is not an error: repositories return
/// `Ok(None)` and the caller decides what absence means.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.database_error")]
    DatabaseError,
    #[error("repository.invalid_data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    pub fn invalid_data(detail: impl Into<String>) -> Self {
        RepositoryError::InvalidData(detail.into())
    }
}
