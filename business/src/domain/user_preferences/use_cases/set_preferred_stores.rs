use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::security::SecurityContext;
use crate::domain::shared::value_objects::UserId;
use crate::domain::user_preferences::errors::UserPreferencesError;
use crate::domain::user_preferences::model::UserPreferences;

pub struct SetPreferredStoresParams {
    pub context: SecurityContext,
    pub user_id: UserId,
    pub store_uuids: Vec<Uuid>,
}

#[async_trait]
pub trait SetPreferredStoresUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SetPreferredStoresParams,
    ) -> Result<UserPreferences, UserPreferencesError>;
}
