use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::basket::use_cases::create::{CreateBasketParams, CreateBasketUseCase};
use business::domain::basket::use_cases::get_all::{GetAllBasketsParams, GetAllBasketsUseCase};
use business::domain::basket::use_cases::update::{UpdateBasketParams, UpdateBasketUseCase};

use crate::api::basket::dto::{BasketSummary, CreateBasketRequest, UpdateBasketRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_uuid};
use crate::api::security::JwtBearer;
use crate::api::summary::list_of_summaries;
use crate::api::tags::ApiTags;

pub struct BasketApi {
    create_use_case: Arc<dyn CreateBasketUseCase>,
    get_all_use_case: Arc<dyn GetAllBasketsUseCase>,
    update_use_case: Arc<dyn UpdateBasketUseCase>,
}

impl BasketApi {
    pub fn new(
        create_use_case: Arc<dyn CreateBasketUseCase>,
        get_all_use_case: Arc<dyn GetAllBasketsUseCase>,
        update_use_case: Arc<dyn UpdateBasketUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            update_use_case,
        }
    }
}

/// Baskets owned by the caller
#[OpenApi]
impl BasketApi {
    /// List the caller's baskets
    #[oai(path = "/baskets", method = "get", tag = "ApiTags::Baskets")]
    async fn get_all(&self, auth: JwtBearer) -> GetAllBasketsResponse {
        let params = GetAllBasketsParams {
            context: auth.context(),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(baskets) => GetAllBasketsResponse::Ok(Json(list_of_summaries(&baskets))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetAllBasketsResponse::Unauthorized(json),
                    _ => GetAllBasketsResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a basket for the caller
    #[oai(path = "/baskets", method = "post", tag = "ApiTags::Baskets")]
    async fn create(&self, auth: JwtBearer, body: Json<CreateBasketRequest>) -> CreateBasketResponse {
        let params = CreateBasketParams {
            context: auth.context(),
            name: body.0.name,
            description: body.0.description,
        };

        match self.create_use_case.execute(params).await {
            Ok(basket) => CreateBasketResponse::Created(Json(BasketSummary::from(&basket))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateBasketResponse::BadRequest(json),
                    401 => CreateBasketResponse::Unauthorized(json),
                    _ => CreateBasketResponse::InternalError(json),
                }
            }
        }
    }

    /// Rename or re-describe a basket
    #[oai(path = "/baskets/:uuid", method = "patch", tag = "ApiTags::Baskets")]
    async fn update(
        &self,
        auth: JwtBearer,
        uuid: Path<String>,
        body: Json<UpdateBasketRequest>,
    ) -> UpdateBasketResponse {
        let uuid = match parse_uuid(&uuid.0, "basket.invalid_id") {
            Ok(uuid) => uuid,
            Err(json) => return UpdateBasketResponse::BadRequest(json),
        };

        let result = match body.0.into_patch() {
            Ok(patch) => {
                self.update_use_case
                    .execute(UpdateBasketParams {
                        context: auth.context(),
                        uuid,
                        patch,
                    })
                    .await
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(basket) => UpdateBasketResponse::Ok(Json(BasketSummary::from(&basket))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateBasketResponse::BadRequest(json),
                    401 => UpdateBasketResponse::Unauthorized(json),
                    403 => UpdateBasketResponse::Forbidden(json),
                    404 => UpdateBasketResponse::NotFound(json),
                    _ => UpdateBasketResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum GetAllBasketsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<BasketSummary>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum CreateBasketResponse {
    #[oai(status = 201)]
    Created(Json<BasketSummary>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum UpdateBasketResponse {
    #[oai(status = 200)]
    Ok(Json<BasketSummary>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
