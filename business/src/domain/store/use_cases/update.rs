use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::store::errors::StoreError;
use crate::domain::store::model::{Store, StorePatch};

pub struct UpdateStoreParams {
    pub uuid: Uuid,
    pub patch: StorePatch,
}

#[async_trait]
pub trait UpdateStoreUseCase: Send + Sync {
    async fn execute(&self, params: UpdateStoreParams) -> Result<Store, StoreError>;
}
