use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::security::is_self;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{ShoppingList, ShoppingListItem};
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::add_item::{
    AddShoppingListItemParams, AddShoppingListItemUseCase,
};
use crate::domain::store::repository::StoreRepository;

pub struct AddShoppingListItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub store_repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddShoppingListItemUseCase for AddShoppingListItemUseCaseImpl {
    async fn execute(
        &self,
        params: AddShoppingListItemParams,
    ) -> Result<ShoppingList, ShoppingListError> {
        self.logger.info(&format!(
            "Adding item {} to shopping list {}",
            params.item_uuid, params.list_uuid
        ));

        let mut list = self
            .repository
            .find_by_uuid(params.list_uuid)
            .await?
            .ok_or(ShoppingListError::NotFound)?;

        if !is_self(&params.context, list.owner.as_str()) {
            return Err(ShoppingListError::Forbidden);
        }

        let item = self
            .item_repository
            .find_by_uuid(params.item_uuid)
            .await?
            .ok_or(ShoppingListError::ItemNotFound)?;

        let store = match params.store_uuid {
            Some(store_uuid) => Some(
                self.store_repository
                    .find_by_uuid(store_uuid)
                    .await?
                    .ok_or(ShoppingListError::StoreNotFound)?,
            ),
            None => None,
        };

        let entry = ShoppingListItem::new(item, store, params.quantity)?;
        list.add_item(entry);
        list.updated_at = Utc::now();
        self.repository.save(&list).await?;

        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::test_support::{
        MockItemRepo, MockShoppingListRepo, MockStoreRepo, mock_logger, owner_context,
        sample_item, sample_list, sample_store, stranger_context,
    };

    fn list_repo(uuid: Uuid, expect_save: bool) -> MockShoppingListRepo {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_find_by_uuid()
            .returning(move |_| Ok(Some(sample_list(uuid))));
        if expect_save {
            mock_repo.expect_save().times(1).returning(|_| Ok(()));
        } else {
            mock_repo.expect_save().never();
        }
        mock_repo
    }

    #[tokio::test]
    async fn should_append_entry_with_store() {
        let list_uuid = Uuid::new_v4();
        let coffee = sample_item("Coffee");
        let market = sample_store("Market");
        let (item_uuid, store_uuid) = (coffee.uuid, market.uuid);

        let mut item_repo = MockItemRepo::new();
        item_repo
            .expect_find_by_uuid()
            .returning(move |_| Ok(Some(coffee.clone())));
        let mut store_repo = MockStoreRepo::new();
        store_repo
            .expect_find_by_uuid()
            .returning(move |_| Ok(Some(market.clone())));

        let use_case = AddShoppingListItemUseCaseImpl {
            repository: Arc::new(list_repo(list_uuid, true)),
            item_repository: Arc::new(item_repo),
            store_repository: Arc::new(store_repo),
            logger: mock_logger(),
        };

        let list = use_case
            .execute(AddShoppingListItemParams {
                context: owner_context(),
                list_uuid,
                item_uuid,
                store_uuid: Some(store_uuid),
                quantity: 2,
            })
            .await
            .unwrap();

        assert_eq!(list.items_count(), 1);
        let entry = &list.items.as_ref().unwrap()[0];
        assert_eq!(entry.item.name, "Coffee");
        assert_eq!(entry.store.as_ref().map(|s| s.uuid), Some(store_uuid));
        assert_eq!(entry.quantity, 2);
        assert!(!entry.purchased);
    }

    #[tokio::test]
    async fn should_fail_when_item_unknown() {
        let list_uuid = Uuid::new_v4();
        let mut item_repo = MockItemRepo::new();
        item_repo.expect_find_by_uuid().returning(|_| Ok(None));

        let use_case = AddShoppingListItemUseCaseImpl {
            repository: Arc::new(list_repo(list_uuid, false)),
            item_repository: Arc::new(item_repo),
            store_repository: Arc::new(MockStoreRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddShoppingListItemParams {
                context: owner_context(),
                list_uuid,
                item_uuid: Uuid::new_v4(),
                store_uuid: None,
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::ItemNotFound));
    }

    #[tokio::test]
    async fn should_fail_when_store_unknown() {
        let list_uuid = Uuid::new_v4();
        let coffee = sample_item("Coffee");
        let item_uuid = coffee.uuid;
        let mut item_repo = MockItemRepo::new();
        item_repo
            .expect_find_by_uuid()
            .returning(move |_| Ok(Some(coffee.clone())));
        let mut store_repo = MockStoreRepo::new();
        store_repo.expect_find_by_uuid().returning(|_| Ok(None));

        let use_case = AddShoppingListItemUseCaseImpl {
            repository: Arc::new(list_repo(list_uuid, false)),
            item_repository: Arc::new(item_repo),
            store_repository: Arc::new(store_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddShoppingListItemParams {
                context: owner_context(),
                list_uuid,
                item_uuid,
                store_uuid: Some(Uuid::new_v4()),
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::StoreNotFound));
    }

    #[tokio::test]
    async fn should_forbid_other_users() {
        let list_uuid = Uuid::new_v4();

        let use_case = AddShoppingListItemUseCaseImpl {
            repository: Arc::new(list_repo(list_uuid, false)),
            item_repository: Arc::new(MockItemRepo::new()),
            store_repository: Arc::new(MockStoreRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddShoppingListItemParams {
                context: stranger_context(),
                list_uuid,
                item_uuid: Uuid::new_v4(),
                store_uuid: None,
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::Forbidden));
    }
}
