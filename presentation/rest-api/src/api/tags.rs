use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    ShoppingLists,
    UserPreferences,
    Stores,
    Items,
    Baskets,
    PriceAlerts,
    InflationReports,
}
