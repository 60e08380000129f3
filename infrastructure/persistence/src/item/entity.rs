use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;

use crate::db::parse_column;

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub unit: String,
}

impl ItemEntity {
    pub fn into_domain(self) -> Result<Item, RepositoryError> {
        Ok(Item::from_repository(
            self.uuid,
            self.name,
            self.description,
            self.brand,
            parse_column("items.unit", &self.unit)?,
        ))
    }
}
