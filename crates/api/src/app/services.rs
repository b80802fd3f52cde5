use std::sync::Arc;

use accounts_auth::{Hs256JwtValidator, Hs256TokenIssuer};
use accounts_core::ServiceFailure;
use accounts_infra::InMemoryUserService;

use crate::app::AppState;
use crate::config::ApiConfig;

/// Wire the in-memory (dev/test) collaborators from configuration.
pub fn build_services(config: &ApiConfig) -> Result<AppState, ServiceFailure> {
    let issuer = Arc::new(Hs256TokenIssuer::new(&config.jwt_secret, config.token_ttl));
    let verifier = Arc::new(Hs256JwtValidator::new(&config.jwt_secret));
    let users = Arc::new(InMemoryUserService::new(issuer));

    if let Some(admin) = &config.admin {
        users.seed_admin(&admin.email, "Admin", "User", &admin.password)?;
    }

    Ok(AppState { users, verifier })
}
