use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Query, payload::Json};

use business::domain::inflation_report::use_cases::get_all::{
    GetInflationReportsParams, GetInflationReportsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::inflation_report::dto::InflationReportSummary;
use crate::api::summary::list_of_summaries;
use crate::api::tags::ApiTags;

pub struct InflationReportApi {
    get_all_use_case: Arc<dyn GetInflationReportsUseCase>,
}

impl InflationReportApi {
    pub fn new(get_all_use_case: Arc<dyn GetInflationReportsUseCase>) -> Self {
        Self { get_all_use_case }
    }
}

#[OpenApi]
impl InflationReportApi {
    /// List inflation reports, newest first
    ///
    /// `report_type` narrows the result to MONTHLY, QUARTERLY or YEARLY reports.
    #[oai(path = "/inflation-reports", method = "get", tag = "ApiTags::InflationReports")]
    async fn get_all(&self, report_type: Query<Option<String>>) -> GetInflationReportsResponse {
        let result = match GetInflationReportsParams::new(report_type.0.as_deref()) {
            Ok(params) => self.get_all_use_case.execute(params).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(reports) => GetInflationReportsResponse::Ok(Json(list_of_summaries(&reports))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetInflationReportsResponse::BadRequest(json),
                    _ => GetInflationReportsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum GetInflationReportsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<InflationReportSummary>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
