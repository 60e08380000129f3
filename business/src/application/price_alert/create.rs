use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::price_alert::errors::PriceAlertError;
use crate::domain::price_alert::model::PriceAlert;
use crate::domain::price_alert::repository::PriceAlertRepository;
use crate::domain::price_alert::use_cases::create::{
    CreatePriceAlertParams, CreatePriceAlertUseCase,
};

pub struct CreatePriceAlertUseCaseImpl {
    pub repository: Arc<dyn PriceAlertRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreatePriceAlertUseCase for CreatePriceAlertUseCaseImpl {
    async fn execute(
        &self,
        params: CreatePriceAlertParams,
    ) -> Result<PriceAlert, PriceAlertError> {
        let owner = params
            .context
            .current_user()
            .cloned()
            .ok_or(PriceAlertError::Unauthorized)?;
        self.logger.info(&format!(
            "Creating {} alert on item {} for {}",
            params.props.alert_type, params.item_uuid, owner
        ));

        let item = self
            .item_repository
            .find_by_uuid(params.item_uuid)
            .await?
            .ok_or(PriceAlertError::ItemNotFound)?;

        let alert = PriceAlert::new(owner, item, params.props);
        self.repository.save(&alert).await?;

        self.logger.info(&format!("Price alert created: {}", alert.uuid));
        Ok(alert)
    }
}
