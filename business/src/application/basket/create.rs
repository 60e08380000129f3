use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::Basket;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::create::{CreateBasketParams, CreateBasketUseCase};
use crate::domain::logger::Logger;

pub struct CreateBasketUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateBasketUseCase for CreateBasketUseCaseImpl {
    async fn execute(&self, params: CreateBasketParams) -> Result<Basket, BasketError> {
        let owner = params
            .context
            .current_user()
            .cloned()
            .ok_or(BasketError::Unauthorized)?;
        self.logger
            .info(&format!("Creating basket '{}' for {}", params.name, owner));

        let basket = Basket::new(owner, params.name, params.description)?;
        self.repository.save(&basket).await?;

        self.logger.info(&format!("Basket created: {}", basket.uuid));
        Ok(basket)
    }
}
