use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::security::is_self;
use crate::domain::user_preferences::errors::UserPreferencesError;
use crate::domain::user_preferences::model::UserPreferences;
use crate::domain::user_preferences::repository::UserPreferencesRepository;
use crate::domain::user_preferences::use_cases::update::{
    UpdateUserPreferencesParams, UpdateUserPreferencesUseCase,
};

pub struct UpdateUserPreferencesUseCaseImpl {
    pub repository: Arc<dyn UserPreferencesRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateUserPreferencesUseCase for UpdateUserPreferencesUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateUserPreferencesParams,
    ) -> Result<UserPreferences, UserPreferencesError> {
        if !is_self(&params.context, params.user_id.as_str()) {
            self.logger
                .warn(&format!("Rejected update of preferences of {}", params.user_id));
            return Err(UserPreferencesError::Forbidden);
        }

        self.logger
            .info(&format!("Updating preferences of {}", params.user_id));

        let mut preferences = match self.repository.find_by_user_uuid(&params.user_id).await? {
            Some(existing) => existing,
            None => {
                self.logger
                    .debug(&format!("No preferences stored for {}", params.user_id));
                UserPreferences::defaults_for(params.user_id.clone())
            }
        };

        preferences.apply_patch(&params.patch);
        self.repository.save(&preferences).await?;

        Ok(preferences)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::security::SecurityContext;
    use crate::domain::user_preferences::model::UserPreferencesPatch;
    use crate::domain::user_preferences::value_objects::{Currency, Language};
    use crate::test_support::{MockUserPreferencesRepo, mock_logger, owner_context, test_user_id};

    fn parisian() -> UserPreferences {
        UserPreferences::from_repository(
            Uuid::new_v4(),
            test_user_id(),
            Currency::Usd,
            Language::French,
            "Paris".to_string(),
            false,
            true,
            Vec::new(),
        )
    }

    fn berlin_patch() -> UserPreferencesPatch {
        UserPreferencesPatch::new(None, None, Some("Berlin".to_string()), Some(true), None)
            .unwrap()
    }

    #[tokio::test]
    async fn should_merge_patch_into_stored_preferences() {
        let mut mock_repo = MockUserPreferencesRepo::new();
        mock_repo
            .expect_find_by_user_uuid()
            .returning(|_| Ok(Some(parisian())));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = UpdateUserPreferencesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let preferences = use_case
            .execute(UpdateUserPreferencesParams {
                context: owner_context(),
                user_id: test_user_id(),
                patch: berlin_patch(),
            })
            .await
            .unwrap();

        assert_eq!(preferences.currency, Currency::Usd);
        assert_eq!(preferences.language, Language::French);
        assert_eq!(preferences.location, "Berlin");
        assert!(preferences.notification_enabled);
        assert!(preferences.email_alerts);
    }

    #[tokio::test]
    async fn should_start_from_defaults_when_nothing_stored() {
        let mut mock_repo = MockUserPreferencesRepo::new();
        mock_repo.expect_find_by_user_uuid().returning(|_| Ok(None));
        mock_repo
            .expect_save()
            .withf(|prefs| prefs.owner.as_str() == "user-123" && prefs.currency == Currency::Eur)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateUserPreferencesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let preferences = use_case
            .execute(UpdateUserPreferencesParams {
                context: owner_context(),
                user_id: test_user_id(),
                patch: berlin_patch(),
            })
            .await
            .unwrap();

        assert_eq!(preferences.location, "Berlin");
        assert!(!preferences.email_alerts);
    }

    #[tokio::test]
    async fn should_forbid_anonymous_caller() {
        let mut mock_repo = MockUserPreferencesRepo::new();
        mock_repo.expect_save().never();

        let use_case = UpdateUserPreferencesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateUserPreferencesParams {
                context: SecurityContext::anonymous(),
                user_id: test_user_id(),
                patch: berlin_patch(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserPreferencesError::Forbidden));
    }
}
