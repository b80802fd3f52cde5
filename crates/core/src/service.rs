//! The user service port consumed by the HTTP layer.

use async_trait::async_trait;

use crate::{AuthenticatedIdentity, ServiceFailure, User, UserId};

/// Account operations behind the HTTP routes.
///
/// Implementations own persistence and credential handling. Every business
/// failure must come back as [`ServiceFailure::Service`] so the caller can
/// echo its status and message.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn register(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        password: &str,
    ) -> Result<User, ServiceFailure>;

    /// Returns a bearer token on success.
    async fn login(&self, email: &str, password: &str) -> Result<String, ServiceFailure>;

    async fn get_all_users(
        &self,
        requester: &AuthenticatedIdentity,
    ) -> Result<Vec<User>, ServiceFailure>;

    async fn delete_user(&self, user_id: &UserId) -> Result<(), ServiceFailure>;
}
