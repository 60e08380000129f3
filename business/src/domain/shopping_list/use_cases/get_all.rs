use async_trait::async_trait;

use crate::domain::security::SecurityContext;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct GetAllShoppingListsParams {
    pub context: SecurityContext,
}

#[async_trait]
pub trait GetAllShoppingListsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllShoppingListsParams,
    ) -> Result<Vec<ShoppingList>, ShoppingListError>;
}
