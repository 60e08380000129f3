use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::security::is_self;
use crate::domain::user_preferences::errors::UserPreferencesError;
use crate::domain::user_preferences::model::UserPreferences;
use crate::domain::user_preferences::repository::UserPreferencesRepository;
use crate::domain::user_preferences::use_cases::get::{
    GetUserPreferencesParams, GetUserPreferencesUseCase,
};

pub struct GetUserPreferencesUseCaseImpl {
    pub repository: Arc<dyn UserPreferencesRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserPreferencesUseCase for GetUserPreferencesUseCaseImpl {
    async fn execute(
        &self,
        params: GetUserPreferencesParams,
    ) -> Result<UserPreferences, UserPreferencesError> {
        if !is_self(&params.context, params.user_id.as_str()) {
            self.logger
                .warn(&format!("Rejected read of preferences of {}", params.user_id));
            return Err(UserPreferencesError::Forbidden);
        }

        self.logger
            .info(&format!("Fetching preferences of {}", params.user_id));

        self.repository
            .find_by_user_uuid(&params.user_id)
            .await?
            .ok_or(UserPreferencesError::NotFound)
    }
}
