use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, payload::Json};

use business::domain::price_alert::model::NewPriceAlertProps;
use business::domain::price_alert::use_cases::create::{
    CreatePriceAlertParams, CreatePriceAlertUseCase,
};
use business::domain::price_alert::use_cases::get_all::{
    GetAllPriceAlertsParams, GetAllPriceAlertsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_uuid};
use crate::api::price_alert::dto::{CreatePriceAlertRequest, PriceAlertSummary};
use crate::api::security::JwtBearer;
use crate::api::summary::list_of_summaries;
use crate::api::tags::ApiTags;

pub struct PriceAlertApi {
    create_use_case: Arc<dyn CreatePriceAlertUseCase>,
    get_all_use_case: Arc<dyn GetAllPriceAlertsUseCase>,
}

impl PriceAlertApi {
    pub fn new(
        create_use_case: Arc<dyn CreatePriceAlertUseCase>,
        get_all_use_case: Arc<dyn GetAllPriceAlertsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
        }
    }
}

#[OpenApi]
impl PriceAlertApi {
    /// List the caller's price alerts
    #[oai(path = "/price-alerts", method = "get", tag = "ApiTags::PriceAlerts")]
    async fn get_all(&self, auth: JwtBearer) -> GetAllPriceAlertsResponse {
        let params = GetAllPriceAlertsParams {
            context: auth.context(),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(alerts) => GetAllPriceAlertsResponse::Ok(Json(list_of_summaries(&alerts))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetAllPriceAlertsResponse::Unauthorized(json),
                    _ => GetAllPriceAlertsResponse::InternalError(json),
                }
            }
        }
    }

    /// Watch an item's price
    #[oai(path = "/price-alerts", method = "post", tag = "ApiTags::PriceAlerts")]
    async fn create(
        &self,
        auth: JwtBearer,
        body: Json<CreatePriceAlertRequest>,
    ) -> CreatePriceAlertResponse {
        let item_uuid = match parse_uuid(&body.0.item_uuid, "price_alert.invalid_item_id") {
            Ok(uuid) => uuid,
            Err(json) => return CreatePriceAlertResponse::BadRequest(json),
        };

        let result = match NewPriceAlertProps::new(&body.0.alert_type, body.0.target_price.as_deref())
        {
            Ok(props) => {
                self.create_use_case
                    .execute(CreatePriceAlertParams {
                        context: auth.context(),
                        item_uuid,
                        props,
                    })
                    .await
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(alert) => CreatePriceAlertResponse::Created(Json(PriceAlertSummary::from(&alert))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreatePriceAlertResponse::BadRequest(json),
                    401 => CreatePriceAlertResponse::Unauthorized(json),
                    404 => CreatePriceAlertResponse::NotFound(json),
                    _ => CreatePriceAlertResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum GetAllPriceAlertsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<PriceAlertSummary>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum CreatePriceAlertResponse {
    #[oai(status = 201)]
    Created(Json<PriceAlertSummary>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
