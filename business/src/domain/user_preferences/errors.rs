#[derive(Debug, thiserror::Error)]
pub enum UserPreferencesError {
    #[error("user_preferences.invalid_currency")]
    InvalidCurrency,
    #[error("user_preferences.invalid_language")]
    InvalidLanguage,
    #[error("user_preferences.not_found")]
    NotFound,
    #[error("user_preferences.store_not_found")]
    StoreNotFound,
    #[error("user_preferences.forbidden")]
    Forbidden,
    #[error("repository.database_error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
