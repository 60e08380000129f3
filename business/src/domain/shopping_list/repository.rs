use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::ShoppingList;

#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    /// Resolves a list, with its entries, by external identifier.
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<ShoppingList>, RepositoryError>;
    async fn get_all_by_owner(&self, owner: &UserId)
    -> Result<Vec<ShoppingList>, RepositoryError>;
    /// Upserts the list and replaces its entries with `list.items`.
    async fn save(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
    async fn delete(&self, uuid: Uuid) -> Result<(), RepositoryError>;
}
