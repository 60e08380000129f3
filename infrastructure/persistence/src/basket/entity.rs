use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::basket::model::{Basket, BasketItem};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use crate::item::entity::ItemEntity;

#[derive(Debug, FromRow)]
pub struct BasketEntity {
    pub uuid: Uuid,
    pub owner_uuid: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A basket line joined with its item; `basket_uuid` groups lines per basket.
#[derive(Debug, FromRow)]
pub struct BasketItemEntity {
    pub basket_uuid: Uuid,
    pub uuid: Uuid,
    pub quantity: i32,
    pub item_uuid: Uuid,
    pub item_name: String,
    pub item_description: Option<String>,
    pub item_brand: Option<String>,
    pub item_unit: String,
}

impl BasketItemEntity {
    pub fn into_domain(self) -> Result<BasketItem, RepositoryError> {
        let item = ItemEntity {
            uuid: self.item_uuid,
            name: self.item_name,
            description: self.item_description,
            brand: self.item_brand,
            unit: self.item_unit,
        }
        .into_domain()?;

        Ok(BasketItem {
            uuid: self.uuid,
            item,
            quantity: self.quantity,
        })
    }
}

impl BasketEntity {
    /// Attaches the lines belonging to this basket, preserving their order.
    pub fn into_domain(self, lines: &mut Vec<BasketItemEntity>) -> Result<Basket, RepositoryError> {
        let (own, rest): (Vec<_>, Vec<_>) =
            lines.drain(..).partition(|line| line.basket_uuid == self.uuid);
        *lines = rest;

        let items = own
            .into_iter()
            .map(BasketItemEntity::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Basket::from_repository(
            self.uuid,
            UserId::new(self.owner_uuid),
            self.name,
            self.description,
            Some(items),
            self.created_at,
            self.updated_at,
        ))
    }
}
