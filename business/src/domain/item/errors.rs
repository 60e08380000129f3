#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.name_empty")]
    NameEmpty,
    #[error("item.invalid_unit")]
    InvalidUnit,
    #[error("item.not_found")]
    NotFound,
    #[error("repository.database_error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
