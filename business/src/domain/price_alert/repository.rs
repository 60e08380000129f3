use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::PriceAlert;

#[async_trait]
pub trait PriceAlertRepository: Send + Sync {
    async fn get_all_by_owner(&self, owner: &UserId) -> Result<Vec<PriceAlert>, RepositoryError>;
    async fn save(&self, alert: &PriceAlert) -> Result<(), RepositoryError>;
}
