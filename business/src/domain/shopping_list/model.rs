use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ShoppingListError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::{UserId, non_blank, parse_amount};
use crate::domain::store::model::Store;

/// One line of a shopping list: what to buy, where, and what was paid.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListItem {
    pub uuid: Uuid,
    pub item: Item,
    pub store: Option<Store>,
    pub quantity: i32,
    pub purchased: bool,
    pub purchased_price: Option<BigDecimal>,
    pub purchased_date: Option<DateTime<Utc>>,
}

impl ShoppingListItem {
    pub fn new(
        item: Item,
        store: Option<Store>,
        quantity: i32,
    ) -> Result<Self, ShoppingListError> {
        if quantity <= 0 {
            return Err(ShoppingListError::InvalidQuantity);
        }

        Ok(Self {
            uuid: Uuid::new_v4(),
            item,
            store,
            quantity,
            purchased: false,
            purchased_price: None,
            purchased_date: None,
        })
    }

    pub fn apply_patch(&mut self, patch: &ShoppingListItemPatch) {
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(purchased) = patch.purchased {
            self.purchased = purchased;
        }
        if let Some(price) = &patch.purchased_price {
            self.purchased_price = Some(price.clone());
        }
        if let Some(date) = patch.purchased_date {
            self.purchased_date = Some(date);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingListItemPatch {
    pub quantity: Option<i32>,
    pub purchased: Option<bool>,
    pub purchased_price: Option<BigDecimal>,
    pub purchased_date: Option<DateTime<Utc>>,
}

impl ShoppingListItemPatch {
    /// Validates the raw request values: quantity must be positive and the
    /// price a non-negative decimal.
    pub fn new(
        quantity: Option<i32>,
        purchased: Option<bool>,
        purchased_price: Option<&str>,
        purchased_date: Option<DateTime<Utc>>,
    ) -> Result<Self, ShoppingListError> {
        if quantity.is_some_and(|q| q <= 0) {
            return Err(ShoppingListError::InvalidQuantity);
        }
        let purchased_price = match purchased_price {
            Some(raw) => Some(parse_amount(raw).ok_or(ShoppingListError::InvalidPrice)?),
            None => None,
        };

        Ok(Self {
            quantity,
            purchased,
            purchased_price,
            purchased_date,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ShoppingList {
    pub uuid: Uuid,
    pub owner: UserId,
    pub name: String,
    pub description: Option<String>,
    /// Entries in insertion order; `None` when they were not loaded.
    pub items: Option<Vec<ShoppingListItem>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingListPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ShoppingListPatch {
    pub fn new(
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Self, ShoppingListError> {
        let name = match name {
            Some(n) => Some(non_blank(n).ok_or(ShoppingListError::NameEmpty)?),
            None => None,
        };
        Ok(Self { name, description })
    }
}

impl ShoppingList {
    pub fn new(
        owner: UserId,
        name: String,
        description: Option<String>,
    ) -> Result<Self, ShoppingListError> {
        let name = non_blank(name).ok_or(ShoppingListError::NameEmpty)?;
        let now = Utc::now();
        Ok(Self {
            uuid: Uuid::new_v4(),
            owner,
            name,
            description,
            items: Some(Vec::new()),
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        uuid: Uuid,
        owner: UserId,
        name: String,
        description: Option<String>,
        items: Option<Vec<ShoppingListItem>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            uuid,
            owner,
            name,
            description,
            items,
            created_at,
            updated_at,
        }
    }

    /// Number of entries, counting an unloaded collection as empty.
    pub fn items_count(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    pub fn apply_patch(&mut self, patch: &ShoppingListPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
    }

    pub fn add_item(&mut self, entry: ShoppingListItem) {
        self.items.get_or_insert_with(Vec::new).push(entry);
    }

    pub fn item_mut(&mut self, uuid: Uuid) -> Option<&mut ShoppingListItem> {
        self.items
            .as_mut()?
            .iter_mut()
            .find(|entry| entry.uuid == uuid)
    }
}
