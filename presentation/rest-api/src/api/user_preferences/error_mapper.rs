use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user_preferences::errors::UserPreferencesError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for UserPreferencesError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            UserPreferencesError::InvalidCurrency | UserPreferencesError::InvalidLanguage => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            UserPreferencesError::Forbidden => {
                error_response(StatusCode::FORBIDDEN, "Forbidden", &message)
            }
            UserPreferencesError::NotFound | UserPreferencesError::StoreNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", &message)
            }
            UserPreferencesError::Repository(_) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "InternalError", &message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_invalid_language_to_400() {
        let (status, Json(body)) = UserPreferencesError::InvalidLanguage.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "user_preferences.invalid_language");
    }

    #[test]
    fn should_map_forbidden_to_403() {
        let (status, _) = UserPreferencesError::Forbidden.into_error_response();
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
