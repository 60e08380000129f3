use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::Basket;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::get_all::{GetAllBasketsParams, GetAllBasketsUseCase};
use crate::domain::logger::Logger;

pub struct GetAllBasketsUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllBasketsUseCase for GetAllBasketsUseCaseImpl {
    async fn execute(&self, params: GetAllBasketsParams) -> Result<Vec<Basket>, BasketError> {
        let owner = params
            .context
            .current_user()
            .ok_or(BasketError::Unauthorized)?;
        self.logger.info(&format!("Fetching baskets for {}", owner));

        Ok(self.repository.get_all_by_owner(owner).await?)
    }
}
