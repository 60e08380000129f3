#[derive(Debug, thiserror::Error)]
pub enum PriceAlertError {
    #[error("price_alert.invalid_alert_type")]
    InvalidAlertType,
    #[error("price_alert.invalid_target_price")]
    InvalidTargetPrice,
    #[error("price_alert.item_not_found")]
    ItemNotFound,
    #[error("price_alert.unauthorized")]
    Unauthorized,
    #[error("repository.database_error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
