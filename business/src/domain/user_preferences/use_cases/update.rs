use async_trait::async_trait;

use crate::domain::security::SecurityContext;
use crate::domain::shared::value_objects::UserId;
use crate::domain::user_preferences::errors::UserPreferencesError;
use crate::domain::user_preferences::model::{UserPreferences, UserPreferencesPatch};

pub struct UpdateUserPreferencesParams {
    pub context: SecurityContext,
    pub user_id: UserId,
    pub patch: UserPreferencesPatch,
}

#[async_trait]
pub trait UpdateUserPreferencesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateUserPreferencesParams,
    ) -> Result<UserPreferences, UserPreferencesError>;
}
