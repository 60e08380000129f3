use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};
use uuid::Uuid;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn json(name: &str, message: &str) -> Json<Self> {
        Json(Self {
            name: name.to_string(),
            message: message.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Builds the `(status, body)` pair every error mapper returns.
pub fn error_response(
    status: StatusCode,
    name: &str,
    message: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    (status, ErrorResponse::json(name, message))
}

/// Parses a uuid taken from a path or body, answering with `message` as a
/// validation error when it is malformed.
pub fn parse_uuid(raw: &str, message: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::json("ValidationError", message))
}
