use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::inflation_report::errors::InflationReportError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for InflationReportError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            InflationReportError::InvalidReportType => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            InflationReportError::Repository(_) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "InternalError", &message)
            }
        }
    }
}
