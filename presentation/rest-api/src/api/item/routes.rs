use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use business::domain::item::use_cases::get_all::GetAllItemsUseCase;
use business::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_uuid};
use crate::api::item::dto::{CreateItemRequest, ItemSummary, UpdateItemRequest};
use crate::api::security::JwtBearer;
use crate::api::summary::list_of_summaries;
use crate::api::tags::ApiTags;

pub struct ItemApi {
    create_use_case: Arc<dyn CreateItemUseCase>,
    get_all_use_case: Arc<dyn GetAllItemsUseCase>,
    update_use_case: Arc<dyn UpdateItemUseCase>,
}

impl ItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateItemUseCase>,
        get_all_use_case: Arc<dyn GetAllItemsUseCase>,
        update_use_case: Arc<dyn UpdateItemUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            update_use_case,
        }
    }
}

/// Item catalogue API
#[OpenApi]
impl ItemApi {
    /// List all items
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn get_all(&self) -> GetAllItemsResponse {
        match self.get_all_use_case.execute().await {
            Ok(items) => GetAllItemsResponse::Ok(Json(list_of_summaries(&items))),
            Err(err) => GetAllItemsResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Create an item
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create(&self, _auth: JwtBearer, body: Json<CreateItemRequest>) -> CreateItemResponse {
        let params = CreateItemParams {
            name: body.0.name,
            description: body.0.description,
            brand: body.0.brand,
            unit: body.0.unit,
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => CreateItemResponse::Created(Json(ItemSummary::from(&item))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateItemResponse::BadRequest(json),
                    _ => CreateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an item
    #[oai(path = "/items/:uuid", method = "patch", tag = "ApiTags::Items")]
    async fn update(
        &self,
        _auth: JwtBearer,
        uuid: Path<String>,
        body: Json<UpdateItemRequest>,
    ) -> UpdateItemResponse {
        let uuid = match parse_uuid(&uuid.0, "item.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return UpdateItemResponse::BadRequest(json),
        };

        let result = match body.0.into_patch() {
            Ok(patch) => self.update_use_case.execute(UpdateItemParams { uuid, patch }).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(item) => UpdateItemResponse::Ok(Json(ItemSummary::from(&item))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateItemResponse::BadRequest(json),
                    404 => UpdateItemResponse::NotFound(json),
                    _ => UpdateItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum GetAllItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemSummary>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemSummary>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum UpdateItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemSummary>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
