use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::shared::value_objects::UserId;
use business::domain::user_preferences::errors::UserPreferencesError;
use business::domain::user_preferences::model::UserPreferences;
use business::domain::user_preferences::use_cases::get::{
    GetUserPreferencesParams, GetUserPreferencesUseCase,
};
use business::domain::user_preferences::use_cases::reset::{
    ResetUserPreferencesParams, ResetUserPreferencesUseCase,
};
use business::domain::user_preferences::use_cases::set_preferred_stores::{
    SetPreferredStoresParams, SetPreferredStoresUseCase,
};
use business::domain::user_preferences::use_cases::update::{
    UpdateUserPreferencesParams, UpdateUserPreferencesUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_uuid};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;
use crate::api::user_preferences::dto::{
    SetPreferredStoresRequest, UpdateUserPreferencesRequest, UserPreferencesSummary,
};

pub struct UserPreferencesApi {
    get_use_case: Arc<dyn GetUserPreferencesUseCase>,
    update_use_case: Arc<dyn UpdateUserPreferencesUseCase>,
    reset_use_case: Arc<dyn ResetUserPreferencesUseCase>,
    set_preferred_stores_use_case: Arc<dyn SetPreferredStoresUseCase>,
}

impl UserPreferencesApi {
    pub fn new(
        get_use_case: Arc<dyn GetUserPreferencesUseCase>,
        update_use_case: Arc<dyn UpdateUserPreferencesUseCase>,
        reset_use_case: Arc<dyn ResetUserPreferencesUseCase>,
        set_preferred_stores_use_case: Arc<dyn SetPreferredStoresUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            update_use_case,
            reset_use_case,
            set_preferred_stores_use_case,
        }
    }
}

/// User preferences API
///
/// A caller can only read and change their own preferences.
#[OpenApi]
impl UserPreferencesApi {
    /// Get a user's preferences
    #[oai(
        path = "/users/:user_uuid/preferences",
        method = "get",
        tag = "ApiTags::UserPreferences"
    )]
    async fn get(&self, auth: JwtBearer, user_uuid: Path<String>) -> UserPreferencesResponse {
        let params = GetUserPreferencesParams {
            context: auth.context(),
            user_id: UserId::new(user_uuid.0),
        };
        UserPreferencesResponse::from_result(self.get_use_case.execute(params).await)
    }

    /// Update a user's preferences
    ///
    /// Only the fields present in the body are changed. Preferences are
    /// created from defaults on first write.
    #[oai(
        path = "/users/:user_uuid/preferences",
        method = "patch",
        tag = "ApiTags::UserPreferences"
    )]
    async fn update(
        &self,
        auth: JwtBearer,
        user_uuid: Path<String>,
        body: Json<UpdateUserPreferencesRequest>,
    ) -> UserPreferencesResponse {
        let result = match body.0.into_patch() {
            Ok(patch) => {
                self.update_use_case
                    .execute(UpdateUserPreferencesParams {
                        context: auth.context(),
                        user_id: UserId::new(user_uuid.0),
                        patch,
                    })
                    .await
            }
            Err(err) => Err(err),
        };
        UserPreferencesResponse::from_result(result)
    }

    /// Reset a user's preferences to the defaults
    ///
    /// Preferred stores are kept.
    #[oai(
        path = "/users/:user_uuid/preferences/reset",
        method = "post",
        tag = "ApiTags::UserPreferences"
    )]
    async fn reset(&self, auth: JwtBearer, user_uuid: Path<String>) -> UserPreferencesResponse {
        let params = ResetUserPreferencesParams {
            context: auth.context(),
            user_id: UserId::new(user_uuid.0),
        };
        UserPreferencesResponse::from_result(self.reset_use_case.execute(params).await)
    }

    /// Replace a user's preferred stores
    #[oai(
        path = "/users/:user_uuid/preferences/stores",
        method = "put",
        tag = "ApiTags::UserPreferences"
    )]
    async fn set_preferred_stores(
        &self,
        auth: JwtBearer,
        user_uuid: Path<String>,
        body: Json<SetPreferredStoresRequest>,
    ) -> UserPreferencesResponse {
        let mut store_uuids: Vec<Uuid> = Vec::with_capacity(body.0.store_uuids.len());
        for raw in &body.0.store_uuids {
            match parse_uuid(raw, "user_preferences.invalid_store_id") {
                Ok(uuid) => store_uuids.push(uuid),
                Err(json) => return UserPreferencesResponse::BadRequest(json),
            }
        }

        let params = SetPreferredStoresParams {
            context: auth.context(),
            user_id: UserId::new(user_uuid.0),
            store_uuids,
        };
        UserPreferencesResponse::from_result(self.set_preferred_stores_use_case.execute(params).await)
    }
}

#[derive(ApiResponse)]
pub enum UserPreferencesResponse {
    #[oai(status = 200)]
    Ok(Json<UserPreferencesSummary>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl UserPreferencesResponse {
    fn from_result(result: Result<UserPreferences, UserPreferencesError>) -> Self {
        match result {
            Ok(preferences) => Self::Ok(Json(UserPreferencesSummary::from(&preferences))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => Self::BadRequest(json),
                    403 => Self::Forbidden(json),
                    404 => Self::NotFound(json),
                    _ => Self::InternalError(json),
                }
            }
        }
    }
}
