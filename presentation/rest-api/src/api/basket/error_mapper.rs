use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::basket::errors::BasketError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for BasketError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            BasketError::NameEmpty => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            BasketError::Unauthorized => {
                error_response(StatusCode::UNAUTHORIZED, "Unauthorized", &message)
            }
            BasketError::Forbidden => error_response(StatusCode::FORBIDDEN, "Forbidden", &message),
            BasketError::NotFound => error_response(StatusCode::NOT_FOUND, "NotFound", &message),
            BasketError::Repository(_) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "InternalError", &message)
            }
        }
    }
}
