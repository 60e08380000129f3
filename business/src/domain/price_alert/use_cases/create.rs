use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::price_alert::errors::PriceAlertError;
use crate::domain::price_alert::model::{NewPriceAlertProps, PriceAlert};
use crate::domain::security::SecurityContext;

pub struct CreatePriceAlertParams {
    pub context: SecurityContext,
    pub item_uuid: Uuid,
    pub props: NewPriceAlertProps,
}

#[async_trait]
pub trait CreatePriceAlertUseCase: Send + Sync {
    async fn execute(&self, params: CreatePriceAlertParams)
    -> Result<PriceAlert, PriceAlertError>;
}
