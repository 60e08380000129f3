use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::Basket;
use crate::domain::security::SecurityContext;

pub struct GetAllBasketsParams {
    pub context: SecurityContext,
}

#[async_trait]
pub trait GetAllBasketsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllBasketsParams) -> Result<Vec<Basket>, BasketError>;
}
