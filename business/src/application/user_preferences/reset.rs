use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::security::is_self;
use crate::domain::user_preferences::errors::UserPreferencesError;
use crate::domain::user_preferences::model::UserPreferences;
use crate::domain::user_preferences::repository::UserPreferencesRepository;
use crate::domain::user_preferences::use_cases::reset::{
    ResetUserPreferencesParams, ResetUserPreferencesUseCase,
};

pub struct ResetUserPreferencesUseCaseImpl {
    pub repository: Arc<dyn UserPreferencesRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResetUserPreferencesUseCase for ResetUserPreferencesUseCaseImpl {
    async fn execute(
        &self,
        params: ResetUserPreferencesParams,
    ) -> Result<UserPreferences, UserPreferencesError> {
        if !is_self(&params.context, params.user_id.as_str()) {
            return Err(UserPreferencesError::Forbidden);
        }

        self.logger
            .info(&format!("Resetting preferences of {}", params.user_id));

        let mut preferences = self
            .repository
            .find_by_user_uuid(&params.user_id)
            .await?
            .unwrap_or_else(|| UserPreferences::defaults_for(params.user_id.clone()));

        preferences.reset_to_defaults();
        self.repository.save(&preferences).await?;

        Ok(preferences)
    }
}
