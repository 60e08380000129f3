//! Repository and logger doubles shared by the use-case tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::domain::basket::model::Basket;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::inflation_report::model::InflationReport;
use crate::domain::inflation_report::repository::InflationReportRepository;
use crate::domain::inflation_report::value_objects::ReportType;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::value_objects::ItemUnit;
use crate::domain::logger::Logger;
use crate::domain::price_alert::model::PriceAlert;
use crate::domain::price_alert::repository::PriceAlertRepository;
use crate::domain::security::SecurityContext;
use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::store::model::Store;
use crate::domain::store::repository::StoreRepository;
use crate::domain::user_preferences::model::UserPreferences;
use crate::domain::user_preferences::repository::UserPreferencesRepository;

mock! {
    pub ItemRepo {}

    #[async_trait]
    impl ItemRepository for ItemRepo {
        async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Item>, RepositoryError>;
        async fn get_all(&self) -> Result<Vec<Item>, RepositoryError>;
        async fn save(&self, item: &Item) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub StoreRepo {}

    #[async_trait]
    impl StoreRepository for StoreRepo {
        async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Store>, RepositoryError>;
        async fn find_by_uuids(&self, uuids: &[Uuid]) -> Result<Vec<Store>, RepositoryError>;
        async fn get_all(&self) -> Result<Vec<Store>, RepositoryError>;
        async fn save(&self, store: &Store) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub BasketRepo {}

    #[async_trait]
    impl BasketRepository for BasketRepo {
        async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<Basket>, RepositoryError>;
        async fn get_all_by_owner(&self, owner: &UserId) -> Result<Vec<Basket>, RepositoryError>;
        async fn save(&self, basket: &Basket) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ShoppingListRepo {}

    #[async_trait]
    impl ShoppingListRepository for ShoppingListRepo {
        async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<ShoppingList>, RepositoryError>;
        async fn get_all_by_owner(&self, owner: &UserId) -> Result<Vec<ShoppingList>, RepositoryError>;
        async fn save(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
        async fn delete(&self, uuid: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub PriceAlertRepo {}

    #[async_trait]
    impl PriceAlertRepository for PriceAlertRepo {
        async fn get_all_by_owner(&self, owner: &UserId) -> Result<Vec<PriceAlert>, RepositoryError>;
        async fn save(&self, alert: &PriceAlert) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub InflationReportRepo {}

    #[async_trait]
    impl InflationReportRepository for InflationReportRepo {
        async fn get_all(&self, report_type: Option<ReportType>) -> Result<Vec<InflationReport>, RepositoryError>;
    }
}

mock! {
    pub UserPreferencesRepo {}

    #[async_trait]
    impl UserPreferencesRepository for UserPreferencesRepo {
        async fn find_by_user_uuid(&self, user: &UserId) -> Result<Option<UserPreferences>, RepositoryError>;
        async fn save(&self, preferences: &UserPreferences) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn test_user_id() -> UserId {
    UserId::new("user-123")
}

pub fn owner_context() -> SecurityContext {
    SecurityContext::authenticated(test_user_id())
}

pub fn stranger_context() -> SecurityContext {
    SecurityContext::authenticated(UserId::new("user-456"))
}

pub fn sample_item(name: &str) -> Item {
    Item::from_repository(Uuid::new_v4(), name.to_string(), None, None, ItemUnit::Piece)
}

pub fn sample_store(name: &str) -> Store {
    Store::from_repository(Uuid::new_v4(), name.to_string(), None)
}

pub fn sample_list(uuid: Uuid) -> ShoppingList {
    ShoppingList::from_repository(
        uuid,
        test_user_id(),
        "Groceries".to_string(),
        Some("Weekly".to_string()),
        Some(Vec::new()),
        Utc::now(),
        Utc::now(),
    )
}
