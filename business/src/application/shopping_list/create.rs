use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::create::{
    CreateShoppingListParams, CreateShoppingListUseCase,
};

pub struct CreateShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateShoppingListUseCase for CreateShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: CreateShoppingListParams,
    ) -> Result<ShoppingList, ShoppingListError> {
        let owner = params
            .context
            .current_user()
            .cloned()
            .ok_or(ShoppingListError::Unauthorized)?;
        self.logger
            .info(&format!("Creating shopping list '{}' for {}", params.name, owner));

        let list = ShoppingList::new(owner, params.name, params.description)?;
        self.repository.save(&list).await?;

        self.logger
            .info(&format!("Shopping list created: {}", list.uuid));
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::security::SecurityContext;
    use crate::test_support::{MockShoppingListRepo, mock_logger, owner_context, test_user_id};

    #[tokio::test]
    async fn should_create_empty_list_for_caller() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_save()
            .withf(|list| list.name == "Groceries" && list.items_count() == 0)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let list = use_case
            .execute(CreateShoppingListParams {
                context: owner_context(),
                name: "Groceries".to_string(),
                description: Some("Weekly".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(list.owner, test_user_id());
        assert_eq!(list.description.as_deref(), Some("Weekly"));
    }

    #[tokio::test]
    async fn should_reject_blank_name() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateShoppingListParams {
                context: owner_context(),
                name: " ".to_string(),
                description: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::NameEmpty));
    }

    #[tokio::test]
    async fn should_reject_anonymous_caller() {
        let use_case = CreateShoppingListUseCaseImpl {
            repository: Arc::new(MockShoppingListRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateShoppingListParams {
                context: SecurityContext::anonymous(),
                name: "Groceries".to_string(),
                description: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::Unauthorized));
    }
}
