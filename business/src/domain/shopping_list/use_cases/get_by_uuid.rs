use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::security::SecurityContext;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct GetShoppingListParams {
    pub context: SecurityContext,
    pub uuid: Uuid,
}

#[async_trait]
pub trait GetShoppingListUseCase: Send + Sync {
    async fn execute(&self, params: GetShoppingListParams)
    -> Result<ShoppingList, ShoppingListError>;
}
