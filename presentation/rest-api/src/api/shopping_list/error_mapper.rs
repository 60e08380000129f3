use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_list::errors::ShoppingListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ShoppingListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            ShoppingListError::NameEmpty
            | ShoppingListError::InvalidQuantity
            | ShoppingListError::InvalidPrice => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            ShoppingListError::Unauthorized => {
                error_response(StatusCode::UNAUTHORIZED, "Unauthorized", &message)
            }
            ShoppingListError::Forbidden => {
                error_response(StatusCode::FORBIDDEN, "Forbidden", &message)
            }
            ShoppingListError::NotFound
            | ShoppingListError::EntryNotFound
            | ShoppingListError::ItemNotFound
            | ShoppingListError::StoreNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", &message)
            }
            ShoppingListError::Repository(_) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "InternalError", &message)
            }
        }
    }
}
