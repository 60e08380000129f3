use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::security::is_self;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::update::{
    UpdateShoppingListParams, UpdateShoppingListUseCase,
};

pub struct UpdateShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateShoppingListUseCase for UpdateShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateShoppingListParams,
    ) -> Result<ShoppingList, ShoppingListError> {
        self.logger
            .info(&format!("Updating shopping list: {}", params.uuid));

        let mut list = self
            .repository
            .find_by_uuid(params.uuid)
            .await?
            .ok_or(ShoppingListError::NotFound)?;

        if !is_self(&params.context, list.owner.as_str()) {
            self.logger
                .warn(&format!("Rejected update of shopping list {}", list.uuid));
            return Err(ShoppingListError::Forbidden);
        }

        list.apply_patch(&params.patch);
        list.updated_at = Utc::now();
        self.repository.save(&list).await?;

        self.logger
            .info(&format!("Shopping list updated: {}", list.uuid));
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::shopping_list::model::ShoppingListPatch;
    use crate::test_support::{
        MockShoppingListRepo, mock_logger, owner_context, sample_list, stranger_context,
    };

    #[tokio::test]
    async fn should_only_change_fields_present_in_patch() {
        let uuid = Uuid::new_v4();
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_find_by_uuid()
            .returning(move |_| Ok(Some(sample_list(uuid))));
        mock_repo
            .expect_save()
            .withf(|list| list.name == "Groceries" && list.description.as_deref() == Some("Daily"))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let list = use_case
            .execute(UpdateShoppingListParams {
                context: owner_context(),
                uuid,
                patch: ShoppingListPatch::new(None, Some("Daily".to_string())).unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(list.description.as_deref(), Some("Daily"));
    }

    #[tokio::test]
    async fn should_forbid_other_users() {
        let uuid = Uuid::new_v4();
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_find_by_uuid()
            .returning(move |_| Ok(Some(sample_list(uuid))));
        mock_repo.expect_save().never();

        let use_case = UpdateShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateShoppingListParams {
                context: stranger_context(),
                uuid,
                patch: ShoppingListPatch::default(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::Forbidden));
    }
}
