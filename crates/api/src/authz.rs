//! Authorization gate: [`Authenticated`] → [`Admin`].
//!
//! The extractor runs the authentication gate itself, so a route that asks
//! for `Admin` always authenticates first.

use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use accounts_auth::authorize_admin;

use crate::app::AppState;
use crate::context::{Admin, Authenticated};
use crate::middleware::AuthRejection;

/// Check the admin capability for an already-authenticated request.
pub fn require_admin(authenticated: Authenticated) -> Result<Admin, AuthRejection> {
    authorize_admin(authenticated.0)
        .map(Admin)
        .map_err(|_| AuthRejection::Forbidden)
}

#[async_trait]
impl<S> FromRequestParts<S> for Admin
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let authenticated = Authenticated::from_request_parts(parts, state).await?;
        require_admin(authenticated)
    }
}

#[cfg(test)]
mod tests {
    use accounts_auth::{AuthenticatedIdentity, Role};

    use super::*;

    fn authenticated(role: Role) -> Authenticated {
        Authenticated(AuthenticatedIdentity::new("u-1".parse().unwrap(), role))
    }

    #[test]
    fn admin_role_is_admitted() {
        let admin = require_admin(authenticated(Role::ADMIN)).unwrap();
        assert_eq!(admin.identity().user_id().as_str(), "u-1");
    }

    #[test]
    fn non_admin_is_forbidden() {
        assert_eq!(
            require_admin(authenticated(Role::USER)),
            Err(AuthRejection::Forbidden)
        );
    }
}
