use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::price_alert::errors::PriceAlertError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for PriceAlertError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            PriceAlertError::InvalidAlertType | PriceAlertError::InvalidTargetPrice => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            PriceAlertError::Unauthorized => {
                error_response(StatusCode::UNAUTHORIZED, "Unauthorized", &message)
            }
            PriceAlertError::ItemNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", &message)
            }
            PriceAlertError::Repository(_) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "InternalError", &message)
            }
        }
    }
}
