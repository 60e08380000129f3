use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::store::model::Store;
use business::domain::user_preferences::model::UserPreferences;

use crate::db::parse_column;

/// Preferences row resolved through `users.uuid`. `id` keys the store set.
#[derive(Debug, FromRow)]
pub struct UserPreferencesEntity {
    pub id: i64,
    pub uuid: Uuid,
    pub user_uuid: String,
    pub currency: String,
    pub language: String,
    pub location: String,
    pub notification_enabled: bool,
    pub email_alerts: bool,
}

impl UserPreferencesEntity {
    pub fn into_domain(self, stores: Vec<Store>) -> Result<UserPreferences, RepositoryError> {
        Ok(UserPreferences::from_repository(
            self.uuid,
            UserId::new(self.user_uuid),
            parse_column("user_preferences.currency", &self.currency)?,
            parse_column("user_preferences.language", &self.language)?,
            self.location,
            self.notification_enabled,
            self.email_alerts,
            stores,
        ))
    }
}
