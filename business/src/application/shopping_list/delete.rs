use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::security::is_self;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::delete::{
    DeleteShoppingListParams, DeleteShoppingListUseCase,
};

pub struct DeleteShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteShoppingListUseCase for DeleteShoppingListUseCaseImpl {
    async fn execute(&self, params: DeleteShoppingListParams) -> Result<(), ShoppingListError> {
        self.logger
            .info(&format!("Deleting shopping list: {}", params.uuid));

        let list = self
            .repository
            .find_by_uuid(params.uuid)
            .await?
            .ok_or(ShoppingListError::NotFound)?;

        if !is_self(&params.context, list.owner.as_str()) {
            return Err(ShoppingListError::Forbidden);
        }

        self.repository.delete(list.uuid).await?;

        self.logger
            .info(&format!("Shopping list deleted: {}", list.uuid));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::test_support::{
        MockShoppingListRepo, mock_logger, owner_context, sample_list, stranger_context,
    };

    #[tokio::test]
    async fn should_delete_owned_list() {
        let uuid = Uuid::new_v4();
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_find_by_uuid()
            .returning(move |_| Ok(Some(sample_list(uuid))));
        mock_repo
            .expect_delete()
            .withf(move |requested| *requested == uuid)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteShoppingListParams {
                context: owner_context(),
                uuid,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_not_delete_list_of_other_user() {
        let uuid = Uuid::new_v4();
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_find_by_uuid()
            .returning(move |_| Ok(Some(sample_list(uuid))));
        mock_repo.expect_delete().never();

        let use_case = DeleteShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteShoppingListParams {
                context: stranger_context(),
                uuid,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::Forbidden));
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_list() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo.expect_find_by_uuid().returning(|_| Ok(None));

        let use_case = DeleteShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteShoppingListParams {
                context: owner_context(),
                uuid: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::NotFound));
    }
}
