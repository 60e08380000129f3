use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::store::errors::StoreError;
use crate::domain::store::model::Store;
use crate::domain::store::repository::StoreRepository;
use crate::domain::store::use_cases::create::{CreateStoreParams, CreateStoreUseCase};

pub struct CreateStoreUseCaseImpl {
    pub repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateStoreUseCase for CreateStoreUseCaseImpl {
    async fn execute(&self, params: CreateStoreParams) -> Result<Store, StoreError> {
        self.logger.info(&format!("Creating store: {}", params.name));

        let store = Store::new(params.name, params.location)?;
        self.repository.save(&store).await?;

        self.logger.info(&format!("Store created: {}", store.uuid));
        Ok(store)
    }
}
