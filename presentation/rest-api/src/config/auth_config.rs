use anyhow::Context;
use std::env;

/// Settings used to validate caller bearer tokens.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_issuer: Option<String>,
}

impl AuthConfig {
    /// Environment variables:
    /// - AUTH_JWT_SECRET: HS256 signing secret shared with the identity provider (required)
    /// - AUTH_JWT_ISSUER: expected `iss` claim (optional)
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = env::var("AUTH_JWT_SECRET").context("AUTH_JWT_SECRET must be set")?;
        let jwt_issuer = env::var("AUTH_JWT_ISSUER")
            .ok()
            .filter(|issuer| !issuer.trim().is_empty());

        Ok(Self {
            jwt_secret,
            jwt_issuer,
        })
    }
}
