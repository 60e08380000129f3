use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Store;

#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Store>, RepositoryError>;
    /// Returns the stores that exist among `uuids`; unknown ones are skipped.
    async fn find_by_uuids(&self, uuids: &[Uuid]) -> Result<Vec<Store>, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<Store>, RepositoryError>;
    async fn save(&self, store: &Store) -> Result<(), RepositoryError>;
}
