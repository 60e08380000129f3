use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct CreateItemParams {
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    /// Raw unit name, validated against `ItemUnit`.
    pub unit: String,
}

#[async_trait]
pub trait CreateItemUseCase: Send + Sync {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError>;
}
