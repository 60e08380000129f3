use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::Basket;
use crate::domain::security::SecurityContext;

pub struct CreateBasketParams {
    pub context: SecurityContext,
    pub name: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait CreateBasketUseCase: Send + Sync {
    async fn execute(&self, params: CreateBasketParams) -> Result<Basket, BasketError>;
}
