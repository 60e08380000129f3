use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::security::SecurityContext;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{ShoppingList, ShoppingListPatch};

pub struct UpdateShoppingListParams {
    pub context: SecurityContext,
    pub uuid: Uuid,
    pub patch: ShoppingListPatch,
}

#[async_trait]
pub trait UpdateShoppingListUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateShoppingListParams,
    ) -> Result<ShoppingList, ShoppingListError>;
}
