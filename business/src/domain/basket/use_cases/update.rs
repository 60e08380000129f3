use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::{Basket, BasketPatch};
use crate::domain::security::SecurityContext;

pub struct UpdateBasketParams {
    pub context: SecurityContext,
    pub uuid: Uuid,
    pub patch: BasketPatch,
}

#[async_trait]
pub trait UpdateBasketUseCase: Send + Sync {
    async fn execute(&self, params: UpdateBasketParams) -> Result<Basket, BasketError>;
}
