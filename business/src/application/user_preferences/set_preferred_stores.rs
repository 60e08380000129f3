use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::security::is_self;
use crate::domain::store::repository::StoreRepository;
use crate::domain::user_preferences::errors::UserPreferencesError;
use crate::domain::user_preferences::model::UserPreferences;
use crate::domain::user_preferences::repository::UserPreferencesRepository;
use crate::domain::user_preferences::use_cases::set_preferred_stores::{
    SetPreferredStoresParams, SetPreferredStoresUseCase,
};

pub struct SetPreferredStoresUseCaseImpl {
    pub repository: Arc<dyn UserPreferencesRepository>,
    pub store_repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetPreferredStoresUseCase for SetPreferredStoresUseCaseImpl {
    async fn execute(
        &self,
        params: SetPreferredStoresParams,
    ) -> Result<UserPreferences, UserPreferencesError> {
        if !is_self(&params.context, params.user_id.as_str()) {
            return Err(UserPreferencesError::Forbidden);
        }

        let requested: HashSet<Uuid> = params.store_uuids.iter().copied().collect();
        self.logger.info(&format!(
            "Setting {} preferred stores for {}",
            requested.len(),
            params.user_id
        ));

        let requested: Vec<Uuid> = requested.into_iter().collect();
        let stores = self.store_repository.find_by_uuids(&requested).await?;
        if stores.len() != requested.len() {
            return Err(UserPreferencesError::StoreNotFound);
        }

        let mut preferences = self
            .repository
            .find_by_user_uuid(&params.user_id)
            .await?
            .unwrap_or_else(|| UserPreferences::defaults_for(params.user_id.clone()));

        preferences.replace_preferred_stores(stores);
        self.repository.save(&preferences).await?;

        Ok(preferences)
    }
}
