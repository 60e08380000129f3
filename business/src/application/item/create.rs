use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, NewItemProps};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use crate::domain::item::value_objects::ItemUnit;
use crate::domain::logger::Logger;

pub struct CreateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateItemUseCase for CreateItemUseCaseImpl {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Creating item: {}", params.name));

        let unit = params
            .unit
            .parse::<ItemUnit>()
            .map_err(|_| ItemError::InvalidUnit)?;

        let item = Item::new(NewItemProps {
            name: params.name,
            description: params.description,
            brand: params.brand,
            unit,
        })?;
        self.repository.save(&item).await?;

        self.logger.info(&format!("Item created: {}", item.uuid));
        Ok(item)
    }
}
