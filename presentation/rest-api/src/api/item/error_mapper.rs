use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::item::errors::ItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            ItemError::NameEmpty | ItemError::InvalidUnit => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            ItemError::NotFound => error_response(StatusCode::NOT_FOUND, "NotFound", &message),
            ItemError::Repository(_) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "InternalError", &message)
            }
        }
    }
}
