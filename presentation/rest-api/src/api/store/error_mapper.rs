use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::store::errors::StoreError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for StoreError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            StoreError::NameEmpty => error_response(StatusCode::BAD_REQUEST, "ValidationError", &message),
            StoreError::NotFound => error_response(StatusCode::NOT_FOUND, "NotFound", &message),
            StoreError::Repository(_) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "InternalError", &message)
            }
        }
    }
}
