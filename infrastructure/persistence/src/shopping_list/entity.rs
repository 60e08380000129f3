use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::shopping_list::model::{ShoppingList, ShoppingListItem};

use crate::item::entity::ItemEntity;
use crate::store::entity::StoreEntity;

#[derive(Debug, FromRow)]
pub struct ShoppingListEntity {
    pub uuid: Uuid,
    pub owner_uuid: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An entry joined with its item and, when set, its store.
#[derive(Debug, FromRow)]
pub struct ShoppingListItemEntity {
    pub list_uuid: Uuid,
    pub uuid: Uuid,
    pub quantity: i32,
    pub purchased: bool,
    pub purchased_price: Option<BigDecimal>,
    pub purchased_date: Option<DateTime<Utc>>,
    pub item_uuid: Uuid,
    pub item_name: String,
    pub item_description: Option<String>,
    pub item_brand: Option<String>,
    pub item_unit: String,
    pub store_uuid: Option<Uuid>,
    pub store_name: Option<String>,
    pub store_location: Option<String>,
}

impl ShoppingListItemEntity {
    pub fn into_domain(self) -> Result<ShoppingListItem, RepositoryError> {
        let item = ItemEntity {
            uuid: self.item_uuid,
            name: self.item_name,
            description: self.item_description,
            brand: self.item_brand,
            unit: self.item_unit,
        }
        .into_domain()?;

        let store = match (self.store_uuid, self.store_name) {
            (Some(uuid), Some(name)) => Some(
                StoreEntity {
                    uuid,
                    name,
                    location: self.store_location,
                }
                .into_domain(),
            ),
            _ => None,
        };

        Ok(ShoppingListItem {
            uuid: self.uuid,
            item,
            store,
            quantity: self.quantity,
            purchased: self.purchased,
            purchased_price: self.purchased_price,
            purchased_date: self.purchased_date,
        })
    }
}

impl ShoppingListEntity {
    /// Builds the list with the entries that belong to it, removing them
    /// from `entries` so the rest can be handed to the next list.
    pub fn into_domain(
        self,
        entries: &mut Vec<ShoppingListItemEntity>,
    ) -> Result<ShoppingList, RepositoryError> {
        let (own, rest): (Vec<_>, Vec<_>) = entries
            .drain(..)
            .partition(|entry| entry.list_uuid == self.uuid);
        *entries = rest;

        let items = own
            .into_iter()
            .map(ShoppingListItemEntity::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ShoppingList::from_repository(
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
