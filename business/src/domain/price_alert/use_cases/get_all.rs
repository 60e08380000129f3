use async_trait::async_trait;

use crate::domain::price_alert::errors::PriceAlertError;
use crate::domain::price_alert::model::PriceAlert;
use crate::domain::security::SecurityContext;

pub struct GetAllPriceAlertsParams {
    pub context: SecurityContext,
}

#[async_trait]
pub trait GetAllPriceAlertsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllPriceAlertsParams,
    ) -> Result<Vec<PriceAlert>, PriceAlertError>;
}
