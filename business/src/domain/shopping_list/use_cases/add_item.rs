use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::security::SecurityContext;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct AddShoppingListItemParams {
    pub context: SecurityContext,
    pub list_uuid: Uuid,
    pub item_uuid: Uuid,
    pub store_uuid: Option<Uuid>,
    pub quantity: i32,
}

#[async_trait]
pub trait AddShoppingListItemUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AddShoppingListItemParams,
    ) -> Result<ShoppingList, ShoppingListError>;
}
