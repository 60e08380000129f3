use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use business::domain::security::SecurityContext;
use business::domain::shared::value_objects::UserId;

use crate::config::auth_config::AuthConfig;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("auth.config_missing")]
    ConfigMissing,
    #[error("auth.token_validation_failed: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("auth.subject_empty")]
    SubjectEmpty,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    iss: Option<String>,
}

fn extract_subject(token: &str, config: &AuthConfig) -> Result<String, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    if let Some(issuer) = &config.jwt_issuer {
        validation.set_issuer(&[issuer]);
    }

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )?;

    let sub = token_data.claims.sub;
    if sub.trim().is_empty() {
        return Err(AuthError::SubjectEmpty);
    }
    Ok(sub)
}

/// Bearer token authentication. Holds the token subject, i.e. the caller's user id.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "jwt_bearer_checker")]
pub struct JwtBearer(pub String);

impl JwtBearer {
    /// Authenticated context handed to use cases.
    pub fn context(&self) -> SecurityContext {
        SecurityContext::authenticated(UserId::new(self.0.clone()))
    }
}

async fn jwt_bearer_checker(req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<String> {
    let result = req
        .data::<AuthConfig>()
        .ok_or(AuthError::ConfigMissing)
        .and_then(|config| extract_subject(&bearer.token, config));

    match result {
        Ok(sub) => Some(sub),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::security::is_self;
    use jsonwebtoken::{EncodingKey, Header, encode};

    const SECRET: &str = "test-secret";

    fn config(issuer: Option<&str>) -> AuthConfig {
        AuthConfig {
            jwt_secret: SECRET.to_string(),
            jwt_issuer: issuer.map(str::to_string),
        }
    }

    fn token(sub: &str, iss: Option<&str>, exp_offset: i64, secret: &str) -> String {
        let claims = Claims {
            sub: sub.to_string(),
            exp: (chrono::Utc::now().timestamp() + exp_offset) as u64,
            iss: iss.map(str::to_string),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn should_extract_subject_from_valid_token() {
        let token = token("user-123", None, 3600, SECRET);
        assert_eq!(extract_subject(&token, &config(None)).unwrap(), "user-123");
    }

    #[test]
    fn should_reject_token_signed_with_other_secret() {
        let token = token("user-123", None, 3600, "other-secret");
        let result = extract_subject(&token, &config(None));
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn should_reject_expired_token() {
        let token = token("user-123", None, -3600, SECRET);
        let result = extract_subject(&token, &config(None));
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn should_reject_token_from_unexpected_issuer() {
        let token = token("user-123", Some("someone-else"), 3600, SECRET);
        let result = extract_subject(&token, &config(Some("pricewise-auth")));
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn should_accept_token_from_expected_issuer() {
        let token = token("user-123", Some("pricewise-auth"), 3600, SECRET);
        let result = extract_subject(&token, &config(Some("pricewise-auth")));
        assert_eq!(result.unwrap(), "user-123");
    }

    #[test]
    fn should_reject_blank_subject() {
        let token = token(" ", None, 3600, SECRET);
        let result = extract_subject(&token, &config(None));
        assert!(matches!(result, Err(AuthError::SubjectEmpty)));
    }

    #[test]
    fn should_reject_malformed_token() {
        assert!(extract_subject("not-a-jwt", &config(None)).is_err());
    }

    #[test]
    fn should_build_context_owned_by_subject() {
        let context = JwtBearer("user-123".to_string()).context();
        assert!(is_self(&context, "user-123"));
        assert!(!is_self(&context, "user-456"));
    }
}
