use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::BasketError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::{UserId, non_blank};

#[derive(Debug, Clone, PartialEq)]
pub struct BasketItem {
    pub uuid: Uuid,
    pub item: Item,
    pub quantity: i32,
}

/// A reference basket of goods whose cost is tracked over time.
#[derive(Debug, Clone, PartialEq)]
pub struct Basket {
    pub uuid: Uuid,
    pub owner: UserId,
    pub name: String,
    pub description: Option<String>,
    /// `None` when the items were not loaded with the basket.
    pub items: Option<Vec<BasketItem>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasketPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl BasketPatch {
    pub fn new(name: Option<String>, description: Option<String>) -> Result<Self, BasketError> {
        let name = match name {
            Some(n) => Some(non_blank(n).ok_or(BasketError::NameEmpty)?),
            None => None,
        };
        Ok(Self { name, description })
    }
}

impl Basket {
    pub fn new(
        owner: UserId,
        name: String,
        description: Option<String>,
    ) -> Result<Self, BasketError> {
        let name = non_blank(name).ok_or(BasketError::NameEmpty)?;
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
        items: Option<Vec<BasketItem>>,
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

    /// Number of items, counting an unloaded collection as empty.
    pub fn items_count(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    pub fn apply_patch(&mut self, patch: &BasketPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
    }
}
