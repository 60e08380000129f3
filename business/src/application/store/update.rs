use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::store::errors::StoreError;
use crate::domain::store::model::Store;
use crate::domain::store::repository::StoreRepository;
use crate::domain::store::use_cases::update::{UpdateStoreParams, UpdateStoreUseCase};

pub struct UpdateStoreUseCaseImpl {
    pub repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateStoreUseCase for UpdateStoreUseCaseImpl {
    async fn execute(&self, params: UpdateStoreParams) -> Result<Store, StoreError> {
        self.logger.info(&format!("Updating store: {}", params.uuid));

        let mut store = self
            .repository
            .find_by_uuid(params.uuid)
            .await?
            .ok_or(StoreError::NotFound)?;

        store.apply_patch(&params.patch);
        self.repository.save(&store).await?;

        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::store::model::StorePatch;
    use crate::test_support::{MockStoreRepo, mock_logger, sample_store};

    #[tokio::test]
    async fn should_rename_store() {
        let existing = sample_store("Corner Shop");
        let uuid = existing.uuid;
        let mut mock_repo = MockStoreRepo::new();
        mock_repo
            .expect_find_by_uuid()
            .withf(move |requested| *requested == uuid)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = UpdateStoreUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let store = use_case
            .execute(UpdateStoreParams {
                uuid,
                patch: StorePatch::new(Some("Corner Market".to_string()), None).unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(store.name, "Corner Market");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_store() {
        let mut mock_repo = MockStoreRepo::new();
        mock_repo.expect_find_by_uuid().returning(|_| Ok(None));

        let use_case = UpdateStoreUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateStoreParams {
                uuid: Uuid::new_v4(),
                patch: StorePatch::default(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), StoreError::NotFound));
    }
}
