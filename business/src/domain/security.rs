//! Caller identity, passed explicitly to every use case that needs it.

use crate::domain::shared::value_objects::UserId;

/// The identity the security layer associated with the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authentication {
    pub authenticated: bool,
    pub principal: Option<Principal>,
}

/// Per-request security context. Built by the HTTP layer from the bearer
/// token and handed to the business layer as a plain value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityContext {
    authentication: Option<Authentication>,
}

impl SecurityContext {
    /// A context without any authentication attached.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user_id: UserId) -> Self {
        Self::with_authentication(Authentication {
            authenticated: true,
            principal: Some(Principal { user_id }),
        })
    }

    pub fn with_authentication(authentication: Authentication) -> Self {
        Self {
            authentication: Some(authentication),
        }
    }

    /// The caller's identifier, if the context is authenticated and the
    /// principal could be resolved.
    pub fn current_user(&self) -> Option<&UserId> {
        let authentication = self.authentication.as_ref()?;
        if !authentication.authenticated {
            return None;
        }
        authentication
            .principal
            .as_ref()
            .map(|principal| &principal.user_id)
    }
}

/// Returns true only when the caller's identifier is exactly `uuid`.
///
/// Missing or unauthenticated contexts answer `false`; this never fails.
pub fn is_self(context: &SecurityContext, uuid: &str) -> bool {
    context
        .current_user()
        .is_some_and(|user_id| user_id.as_str() == uuid)
}
