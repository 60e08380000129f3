use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::store::use_cases::create::{CreateStoreParams, CreateStoreUseCase};
use business::domain::store::use_cases::get_all::GetAllStoresUseCase;
use business::domain::store::use_cases::update::{UpdateStoreParams, UpdateStoreUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_uuid};
use crate::api::security::JwtBearer;
use crate::api::store::dto::{CreateStoreRequest, StoreSummary, UpdateStoreRequest};
use crate::api::summary::list_of_summaries;
use crate::api::tags::ApiTags;

pub struct StoreApi {
    create_use_case: Arc<dyn CreateStoreUseCase>,
    get_all_use_case: Arc<dyn GetAllStoresUseCase>,
    update_use_case: Arc<dyn UpdateStoreUseCase>,
}

impl StoreApi {
    pub fn new(
        create_use_case: Arc<dyn CreateStoreUseCase>,
        get_all_use_case: Arc<dyn GetAllStoresUseCase>,
        update_use_case: Arc<dyn UpdateStoreUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            update_use_case,
        }
    }
}

/// Store catalogue API
#[OpenApi]
impl StoreApi {
    /// List all stores, ordered by name.
    #[oai(path = "/stores", method = "get", tag = "ApiTags::Stores")]
    async fn get_all(&self) -> GetAllStoresResponse {
        match self.get_all_use_case.execute().await {
            Ok(stores) => GetAllStoresResponse::Ok(Json(list_of_summaries(&stores))),
            Err(err) => GetAllStoresResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Register a store
    #[oai(path = "/stores", method = "post", tag = "ApiTags::Stores")]
    async fn create(&self, _auth: JwtBearer, body: Json<CreateStoreRequest>) -> CreateStoreResponse {
        let params = CreateStoreParams {
            name: body.0.name,
            location: body.0.location,
        };

        match self.create_use_case.execute(params).await {
            Ok(store) => CreateStoreResponse::Created(Json(StoreSummary::from(&store))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateStoreResponse::BadRequest(json),
                    _ => CreateStoreResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a store
    ///
    /// Only the fields present in the body are changed.
    #[oai(path = "/stores/:uuid", method = "patch", tag = "ApiTags::Stores")]
    async fn update(
        &self,
        _auth: JwtBearer,
        uuid: Path<String>,
        body: Json<UpdateStoreRequest>,
    ) -> UpdateStoreResponse {
        let uuid = match parse_uuid(&uuid.0, "store.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return UpdateStoreResponse::BadRequest(json),
        };

        let result = match body.0.into_patch() {
            Ok(patch) => self.update_use_case.execute(UpdateStoreParams { uuid, patch }).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(store) => UpdateStoreResponse::Ok(Json(StoreSummary::from(&store))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateStoreResponse::BadRequest(json),
                    404 => UpdateStoreResponse::NotFound(json),
                    _ => UpdateStoreResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum GetAllStoresResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<StoreSummary>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum CreateStoreResponse {
    #[oai(status = 201)]
    Created(Json<StoreSummary>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum UpdateStoreResponse {
    #[oai(status = 200)]
    Ok(Json<StoreSummary>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
