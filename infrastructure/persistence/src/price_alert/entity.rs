use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::price_alert::model::PriceAlert;
use business::domain::shared::value_objects::UserId;

use crate::db::parse_column;
use crate::item::entity::ItemEntity;

/// Alert row joined with its item. Alerts without an item cannot be loaded.
#[derive(Debug, FromRow)]
pub struct PriceAlertEntity {
    pub uuid: Uuid,
    pub owner_uuid: String,
    pub alert_type: String,
    pub target_price: Option<BigDecimal>,
    pub last_triggered: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub item_uuid: Uuid,
    pub item_name: String,
    pub item_description: Option<String>,
    pub item_brand: Option<String>,
    pub item_unit: String,
}

impl PriceAlertEntity {
    pub fn into_domain(self) -> Result<PriceAlert, RepositoryError> {
        let item = ItemEntity {
            uuid: self.item_uuid,
            name: self.item_name,
            description: self.item_description,
            brand: self.item_brand,
            unit: self.item_unit,
        }
        .into_domain()?;

        Ok(PriceAlert::from_repository(
            self.uuid,
            UserId::new(self.owner_uuid),
            parse_column("price_alerts.alert_type", &self.alert_type)?,
            self.target_price,
            self.last_triggered,
            item,
            self.created_at,
        ))
    }
}
