use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::security::SecurityContext;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct DeleteShoppingListParams {
    pub context: SecurityContext,
    pub uuid: Uuid,
}

#[async_trait]
pub trait DeleteShoppingListUseCase: Send + Sync {
    async fn execute(&self, params: DeleteShoppingListParams) -> Result<(), ShoppingListError>;
}
