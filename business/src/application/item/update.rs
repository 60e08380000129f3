use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::logger::Logger;

pub struct UpdateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Updating item: {}", params.uuid));

        let mut item = self
            .repository
            .find_by_uuid(params.uuid)
            .await?
            .ok_or(ItemError::NotFound)?;

        item.apply_patch(&params.patch);
        self.repository.save(&item).await?;

        self.logger.info(&format!("Item updated: {}", item.uuid));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::item::model::ItemPatch;
    use crate::test_support::{MockItemRepo, mock_logger, sample_item};

    #[tokio::test]
    async fn should_apply_patch_and_save() {
        let existing = sample_item("Milk");
        let uuid = existing.uuid;
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_uuid()
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_save()
            .withf(|item| item.brand.as_deref() == Some("Valley") && item.name == "Milk")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let patch = ItemPatch::new(None, None, Some("Valley".to_string()), None).unwrap();
        let item = use_case
            .execute(UpdateItemParams { uuid, patch })
            .await
            .unwrap();

        assert_eq!(item.uuid, uuid);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_item() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_find_by_uuid().returning(|_| Ok(None));
        mock_repo.expect_save().never();

        let use_case = UpdateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateItemParams {
                uuid: Uuid::new_v4(),
                patch: ItemPatch::default(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }
}
