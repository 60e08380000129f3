use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::security::is_self;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::update_item::{
    UpdateShoppingListItemParams, UpdateShoppingListItemUseCase,
};

pub struct UpdateShoppingListItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateShoppingListItemUseCase for UpdateShoppingListItemUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateShoppingListItemParams,
    ) -> Result<ShoppingList, ShoppingListError> {
        self.logger.info(&format!(
            "Updating entry {} of shopping list {}",
            params.entry_uuid, params.list_uuid
        ));

        let mut list = self
            .repository
            .find_by_uuid(params.list_uuid)
            .await?
            .ok_or(ShoppingListError::NotFound)?;

        if !is_self(&params.context, list.owner.as_str()) {
            return Err(ShoppingListError::Forbidden);
        }

        let entry = list
            .item_mut(params.entry_uuid)
            .ok_or(ShoppingListError::EntryNotFound)?;
        entry.apply_patch(&params.patch);
        if params.patch.purchased == Some(true) && entry.purchased_date.is_none() {
            entry.purchased_date = Some(Utc::now());
        }

        list.updated_at = Utc::now();
        self.repository.save(&list).await?;

        Ok(list)
    }
}
