use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::security::is_self;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_by_uuid::{
    GetShoppingListParams, GetShoppingListUseCase,
};

pub struct GetShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShoppingListUseCase for GetShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: GetShoppingListParams,
    ) -> Result<ShoppingList, ShoppingListError> {
        self.logger
            .info(&format!("Fetching shopping list: {}", params.uuid));

        let list = self
            .repository
            .find_by_uuid(params.uuid)
            .await?
            .ok_or(ShoppingListError::NotFound)?;

        if !is_self(&params.context, list.owner.as_str()) {
            return Err(ShoppingListError::Forbidden);
        }

        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::security::SecurityContext;
    use crate::test_support::{
        MockShoppingListRepo, mock_logger, owner_context, sample_list, stranger_context,
    };

    fn use_case_returning(list: Option<ShoppingList>) -> GetShoppingListUseCaseImpl {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_find_by_uuid()
            .returning(move |_| Ok(list.clone()));
        GetShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_owned_list() {
        let uuid = Uuid::new_v4();
        let use_case = use_case_returning(Some(sample_list(uuid)));

        let list = use_case
            .execute(GetShoppingListParams {
                context: owner_context(),
                uuid,
            })
            .await
            .unwrap();

        assert_eq!(list.uuid, uuid);
        assert_eq!(list.name, "Groceries");
    }

    #[tokio::test]
    async fn should_return_not_found_when_absent() {
        let use_case = use_case_returning(None);

        let result = use_case
            .execute(GetShoppingListParams {
                context: owner_context(),
                uuid: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::NotFound));
    }

    #[tokio::test]
    async fn should_forbid_other_users_and_anonymous_callers() {
        let uuid = Uuid::new_v4();

        for context in [stranger_context(), SecurityContext::anonymous()] {
            let use_case = use_case_returning(Some(sample_list(uuid)));
            let result = use_case
                .execute(GetShoppingListParams { context, uuid })
                .await;
            assert!(matches!(result.unwrap_err(), ShoppingListError::Forbidden));
        }
    }
}
