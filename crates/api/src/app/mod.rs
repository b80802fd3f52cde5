//! HTTP API application wiring (Axum router + collaborator wiring).
//!
//! - `services.rs`: collaborator wiring (verifier, issuer, user service)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and their validation rules
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use accounts_auth::CredentialVerifier;
use accounts_core::UserService;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Collaborators shared by every request. Holds no per-request state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub verifier: Arc<dyn CredentialVerifier>,
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// `mount_prefix` must already be normalized (see
/// [`crate::config::normalize_prefix`]); an empty prefix mounts at the root.
/// Under a prefix the collection routes answer both `{prefix}` and
/// `{prefix}/`, since `nest` only maps a nested `/` to the bare prefix.
pub fn build_app(state: AppState, mount_prefix: &str) -> Router {
    let app = Router::new().route("/health", get(routes::system::health));
    let app = if mount_prefix.is_empty() {
        app.merge(routes::users::router().with_state(state))
    } else {
        app.nest(mount_prefix, routes::users::router().with_state(state.clone()))
            .route(
                &format!("{mount_prefix}/"),
                routes::users::collection().with_state(state),
            )
    };

    app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
