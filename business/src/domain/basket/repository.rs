use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Basket;

#[async_trait]
pub trait BasketRepository: Send + Sync {
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Basket>, RepositoryError>;
    async fn get_all_by_owner(&self, owner: &UserId) -> Result<Vec<Basket>, RepositoryError>;
    async fn save(&self, basket: &Basket) -> Result<(), RepositoryError>;
}
