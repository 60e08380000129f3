use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::UserPreferences;

#[async_trait]
pub trait UserPreferencesRepository: Send + Sync {
    /// Resolves preferences through the owning user's external identifier.
    async fn find_by_user_uuid(
        &self,
        user: &UserId,
    ) -> Result<Option<UserPreferences>, RepositoryError>;
    /// Upserts the preferences (creating the user row if needed) and
    /// replaces the preferred store set.
    async fn save(&self, preferences: &UserPreferences) -> Result<(), RepositoryError>;
}
