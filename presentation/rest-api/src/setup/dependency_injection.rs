use std::sync::Arc;

use logger::TracingLogger;
use persistence::basket::repository::BasketRepositoryPostgres;
use persistence::inflation_report::repository::InflationReportRepositoryPostgres;
use persistence::item::repository::ItemRepositoryPostgres;
use persistence::price_alert::repository::PriceAlertRepositoryPostgres;
use persistence::shopping_list::repository::ShoppingListRepositoryPostgres;
use persistence::store::repository::StoreRepositoryPostgres;
use persistence::user_preferences::repository::UserPreferencesRepositoryPostgres;

use business::application::basket::create::CreateBasketUseCaseImpl;
use business::application::basket::get_all::GetAllBasketsUseCaseImpl;
use business::application::basket::update::UpdateBasketUseCaseImpl;
use business::application::inflation_report::get_all::GetInflationReportsUseCaseImpl;
use business::application::item::create::CreateItemUseCaseImpl;
use business::application::item::get_all::GetAllItemsUseCaseImpl;
use business::application::item::update::UpdateItemUseCaseImpl;
use business::application::price_alert::create::CreatePriceAlertUseCaseImpl;
use business::application::price_alert::get_all::GetAllPriceAlertsUseCaseImpl;
use business::application::shopping_list::add_item::AddShoppingListItemUseCaseImpl;
use business::application::shopping_list::create::CreateShoppingListUseCaseImpl;
use business::application::shopping_list::delete::DeleteShoppingListUseCaseImpl;
use business::application::shopping_list::get_all::GetAllShoppingListsUseCaseImpl;
use business::application::shopping_list::get_by_uuid::GetShoppingListUseCaseImpl;
use business::application::shopping_list::update::UpdateShoppingListUseCaseImpl;
use business::application::shopping_list::update_item::UpdateShoppingListItemUseCaseImpl;
use business::application::store::create::CreateStoreUseCaseImpl;
use business::application::store::get_all::GetAllStoresUseCaseImpl;
use business::application::store::update::UpdateStoreUseCaseImpl;
use business::application::user_preferences::get::GetUserPreferencesUseCaseImpl;
use business::application::user_preferences::reset::ResetUserPreferencesUseCaseImpl;
use business::application::user_preferences::set_preferred_stores::SetPreferredStoresUseCaseImpl;
use business::application::user_preferences::update::UpdateUserPreferencesUseCaseImpl;

use crate::api::basket::routes::BasketApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::inflation_report::routes::InflationReportApi;
use crate::api::item::routes::ItemApi;
use crate::api::price_alert::routes::PriceAlertApi;
use crate::api::shopping_list::routes::ShoppingListApi;
use crate::api::store::routes::StoreApi;
use crate::api::user_preferences::routes::UserPreferencesApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub shopping_list_api: ShoppingListApi,
    pub user_preferences_api: UserPreferencesApi,
    pub store_api: StoreApi,
    pub item_api: ItemApi,
    pub basket_api: BasketApi,
    pub price_alert_api: PriceAlertApi,
    pub inflation_report_api: InflationReportApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let item_repository = Arc::new(ItemRepositoryPostgres::new(pool.clone()));
        let store_repository = Arc::new(StoreRepositoryPostgres::new(pool.clone()));
        let basket_repository = Arc::new(BasketRepositoryPostgres::new(pool.clone()));
        let shopping_list_repository = Arc::new(ShoppingListRepositoryPostgres::new(pool.clone()));
        let price_alert_repository = Arc::new(PriceAlertRepositoryPostgres::new(pool.clone()));
        let inflation_report_repository =
            Arc::new(InflationReportRepositoryPostgres::new(pool.clone()));
        let user_preferences_repository = Arc::new(UserPreferencesRepositoryPostgres::new(pool));

        // Shopping list use cases
        let shopping_list_api = ShoppingListApi::new(
            Arc::new(CreateShoppingListUseCaseImpl {
                repository: shopping_list_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllShoppingListsUseCaseImpl {
                repository: shopping_list_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetShoppingListUseCaseImpl {
                repository: shopping_list_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateShoppingListUseCaseImpl {
                repository: shopping_list_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteShoppingListUseCaseImpl {
                repository: shopping_list_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(AddShoppingListItemUseCaseImpl {
                repository: shopping_list_repository.clone(),
                item_repository: item_repository.clone(),
                store_repository: store_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateShoppingListItemUseCaseImpl {
                repository: shopping_list_repository,
                logger: logger.clone(),
            }),
        );

        // User preferences use cases
        let user_preferences_api = UserPreferencesApi::new(
            Arc::new(GetUserPreferencesUseCaseImpl {
                repository: user_preferences_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateUserPreferencesUseCaseImpl {
                repository: user_preferences_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ResetUserPreferencesUseCaseImpl {
                repository: user_preferences_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(SetPreferredStoresUseCaseImpl {
                repository: user_preferences_repository,
                store_repository: store_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Catalogue use cases
        let store_api = StoreApi::new(
            Arc::new(CreateStoreUseCaseImpl {
                repository: store_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllStoresUseCaseImpl {
                repository: store_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateStoreUseCaseImpl {
                repository: store_repository,
                logger: logger.clone(),
            }),
        );
        let item_api = ItemApi::new(
            Arc::new(CreateItemUseCaseImpl {
                repository: item_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllItemsUseCaseImpl {
                repository: item_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateItemUseCaseImpl {
                repository: item_repository.clone(),
                logger: logger.clone(),
            }),
        );

        let basket_api = BasketApi::new(
            Arc::new(CreateBasketUseCaseImpl {
                repository: basket_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllBasketsUseCaseImpl {
                repository: basket_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateBasketUseCaseImpl {
                repository: basket_repository,
                logger: logger.clone(),
            }),
        );

        let price_alert_api = PriceAlertApi::new(
            Arc::new(CreatePriceAlertUseCaseImpl {
                repository: price_alert_repository.clone(),
                item_repository,
                logger: logger.clone(),
            }),
            Arc::new(GetAllPriceAlertsUseCaseImpl {
                repository: price_alert_repository,
                logger: logger.clone(),
            }),
        );

        let inflation_report_api =
            InflationReportApi::new(Arc::new(GetInflationReportsUseCaseImpl {
                repository: inflation_report_repository,
                logger,
            }));

        Self {
            health_api: HealthApi::new(),
            shopping_list_api,
            user_preferences_api,
            store_api,
            item_api,
            basket_api,
            price_alert_api,
            inflation_report_api,
        }
    }
}
