#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store.name_empty")]
    NameEmpty,
    #[error("store.not_found")]
    NotFound,
    #[error("repository.database_error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
