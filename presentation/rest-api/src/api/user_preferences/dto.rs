use poem_openapi::Object;

use business::domain::user_preferences::errors::UserPreferencesError;
use business::domain::user_preferences::model::{UserPreferences, UserPreferencesPatch};

use crate::api::store::dto::StoreSummary;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateUserPreferencesRequest {
    /// One of EUR, USD, GBP, CHF, PLN, JPY
    #[oai(skip_serializing_if_is_none)]
    pub currency: Option<String>,
    /// One of ENGLISH, GERMAN, FRENCH, SPANISH, ITALIAN, POLISH
    #[oai(skip_serializing_if_is_none)]
    pub language: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub notification_enabled: Option<bool>,
    #[oai(skip_serializing_if_is_none)]
    pub email_alerts: Option<bool>,
}

impl UpdateUserPreferencesRequest {
    pub fn into_patch(self) -> Result<UserPreferencesPatch, UserPreferencesError> {
        UserPreferencesPatch::new(
            self.currency.as_deref(),
            self.language.as_deref(),
            self.location,
            self.notification_enabled,
            self.email_alerts,
        )
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SetPreferredStoresRequest {
    /// Replaces the whole preferred store set
    pub store_uuids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "camelCase")]
pub struct UserPreferencesSummary {
    pub currency: String,
    pub language: String,
    pub location: String,
    pub notification_enabled: bool,
    pub email_alerts: bool,
    /// Ordered by store name
    pub preferred_stores: Vec<StoreSummary>,
}

impl From<&UserPreferences> for UserPreferencesSummary {
    fn from(preferences: &UserPreferences) -> Self {
        let mut preferred_stores: Vec<StoreSummary> = preferences
            .preferred_stores
            .iter()
            .map(StoreSummary::from)
            .collect();
        preferred_stores.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            currency: preferences.currency.to_string(),
            language: preferences.language.to_string(),
            location: preferences.location.clone(),
            notification_enabled: preferences.notification_enabled,
            email_alerts: preferences.email_alerts,
            preferred_stores,
        }
    }
}
