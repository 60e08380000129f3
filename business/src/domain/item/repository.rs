use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Item;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Item>, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError>;
    async fn save(&self, item: &Item) -> Result<(), RepositoryError>;
}
