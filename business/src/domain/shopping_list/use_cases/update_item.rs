use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::security::SecurityContext;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{ShoppingList, ShoppingListItemPatch};

pub struct UpdateShoppingListItemParams {
    pub context: SecurityContext,
    pub list_uuid: Uuid,
    pub entry_uuid: Uuid,
    pub patch: ShoppingListItemPatch,
}

#[async_trait]
pub trait UpdateShoppingListItemUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateShoppingListItemParams,
    ) -> Result<ShoppingList, ShoppingListError>;
}
