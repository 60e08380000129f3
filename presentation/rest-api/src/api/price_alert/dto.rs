use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::price_alert::model::PriceAlert;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreatePriceAlertRequest {
    pub item_uuid: String,
    /// One of PRICE_DROP, PRICE_INCREASE, TARGET_PRICE
    pub alert_type: String,
    /// Decimal amount as a string
    #[oai(skip_serializing_if_is_none)]
    pub target_price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "camelCase")]
pub struct PriceAlertSummary {
    pub uuid: Uuid,
    pub alert_type: String,
    #[oai(skip_serializing_if_is_none)]
    pub last_triggered: Option<DateTime<Utc>>,
    #[oai(skip_serializing_if_is_none)]
    pub target_price: Option<String>,
    pub item_uuid: Uuid,
    pub item_name: String,
}

impl From<&PriceAlert> for PriceAlertSummary {
    fn from(alert: &PriceAlert) -> Self {
        Self {
            uuid: alert.uuid,
            alert_type: alert.alert_type.to_string(),
            last_triggered: alert.last_triggered,
            target_price: alert.target_price.as_ref().map(ToString::to_string),
            item_uuid: alert.item.uuid,
            item_name: alert.item.name.clone(),
        }
    }
}
