#[derive(Debug, thiserror::Error)]
pub enum BasketError {
    #[error("basket.name_empty")]
    NameEmpty,
    #[error("basket.not_found")]
    NotFound,
    #[error("basket.unauthorized")]
    Unauthorized,
    #[error("basket.forbidden")]
    Forbidden,
    #[error("repository.database_error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
