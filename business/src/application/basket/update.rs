use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::Basket;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::update::{UpdateBasketParams, UpdateBasketUseCase};
use crate::domain::logger::Logger;
use crate::domain::security::is_self;

pub struct UpdateBasketUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateBasketUseCase for UpdateBasketUseCaseImpl {
    async fn execute(&self, params: UpdateBasketParams) -> Result<Basket, BasketError> {
        self.logger.info(&format!("Updating basket: {}", params.uuid));

        let mut basket = self
            .repository
            .find_by_uuid(params.uuid)
            .await?
            .ok_or(BasketError::NotFound)?;

        if !is_self(&params.context, basket.owner.as_str()) {
            self.logger
                .warn(&format!("Rejected update of basket {}", basket.uuid));
            return Err(BasketError::Forbidden);
        }

        basket.apply_patch(&params.patch);
        basket.updated_at = Utc::now();
        self.repository.save(&basket).await?;

        Ok(basket)
    }
}
