use async_trait::async_trait;

use crate::domain::security::SecurityContext;
use crate::domain::shared::value_objects::UserId;
use crate::domain::user_preferences::errors::UserPreferencesError;
use crate::domain::user_preferences::model::UserPreferences;

pub struct ResetUserPreferencesParams {
    pub context: SecurityContext,
    pub user_id: UserId,
}

#[async_trait]
pub trait ResetUserPreferencesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ResetUserPreferencesParams,
    ) -> Result<UserPreferences, UserPreferencesError>;
}
