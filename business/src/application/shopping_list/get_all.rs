use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_all::{
    GetAllShoppingListsParams, GetAllShoppingListsUseCase,
};

pub struct GetAllShoppingListsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllShoppingListsUseCase for GetAllShoppingListsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllShoppingListsParams,
    ) -> Result<Vec<ShoppingList>, ShoppingListError> {
        let owner = params
            .context
            .current_user()
            .ok_or(ShoppingListError::Unauthorized)?;
        self.logger
            .info(&format!("Fetching shopping lists for {}", owner));

        let lists = self.repository.get_all_by_owner(owner).await?;

        self.logger
            .debug(&format!("Found {} shopping lists", lists.len()));
        Ok(lists)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockShoppingListRepo, mock_logger, owner_context, sample_list};

    #[tokio::test]
    async fn should_return_lists_of_caller() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_get_all_by_owner()
            .withf(|owner| owner.as_str() == "user-123")
            .returning(|_| Ok(vec![sample_list(Uuid::new_v4()), sample_list(Uuid::new_v4())]));

        let use_case = GetAllShoppingListsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let lists = use_case
            .execute(GetAllShoppingListsParams {
                context: owner_context(),
            })
            .await
            .unwrap();

        assert_eq!(lists.len(), 2);
    }

    #[tokio::test]
    async fn should_surface_database_error() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_get_all_by_owner()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetAllShoppingListsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllShoppingListsParams {
                context: owner_context(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::Repository(_)));
    }
}
