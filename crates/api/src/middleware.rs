//! Authentication gate: bearer token → [`Authenticated`].

use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::debug;

use crate::app::{AppState, errors};
use crate::context::Authenticated;

/// Why a request was stopped by the authentication or authorization gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRejection {
    Unauthenticated(&'static str),
    Forbidden,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated(msg) => {
                errors::json_error(StatusCode::UNAUTHORIZED, "unauthorized", msg)
            }
            AuthRejection::Forbidden => {
                errors::json_error(StatusCode::FORBIDDEN, "forbidden", "forbidden")
            }
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Authenticated
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let token = extract_bearer(&parts.headers)?;

        let identity = state
            .verifier
            .verify(token, Utc::now())
            .await
            .map_err(|e| {
                debug!(error = %e, "bearer token rejected");
                AuthRejection::Unauthenticated("invalid or expired token")
            })?;

        Ok(Authenticated(identity))
    }
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthRejection> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(AuthRejection::Unauthenticated("missing bearer token"))?;

    let header = header
        .to_str()
        .map_err(|_| AuthRejection::Unauthenticated("malformed authorization header"))?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or(AuthRejection::Unauthenticated("malformed authorization header"))?;

    let token = header.trim();
    if token.is_empty() {
        return Err(AuthRejection::Unauthenticated("missing bearer token"));
    }

    Ok(token)
}
