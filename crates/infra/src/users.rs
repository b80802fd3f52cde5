//! In-memory user directory for tests/dev.
//!
//! Credentials are kept exactly as supplied; there is no hashing and nothing
//! survives a restart.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use accounts_auth::TokenIssuer;
use accounts_core::{
    AuthenticatedIdentity, Role, ServiceError, ServiceFailure, User, UserId, UserService,
};

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password: String,
}

/// `UserService` backed by a process-local map.
pub struct InMemoryUserService {
    inner: RwLock<HashMap<UserId, StoredUser>>,
    issuer: Arc<dyn TokenIssuer>,
}

impl InMemoryUserService {
    pub fn new(issuer: Arc<dyn TokenIssuer>) -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            issuer,
        }
    }

    /// Insert an account with the admin role (startup seeding).
    pub fn seed_admin(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        password: &str,
    ) -> Result<User, ServiceFailure> {
        let user = self.insert(email, first_name, last_name, password, Role::ADMIN)?;
        info!(user_id = %user.id, "seeded admin account");
        Ok(user)
    }

    fn insert(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        password: &str,
        role: Role,
    ) -> Result<User, ServiceFailure> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;

        if map.values().any(|u| u.user.email.eq_ignore_ascii_case(email)) {
            return Err(ServiceError::conflict("User already exists").into());
        }

        let user = User {
            id: UserId::generate(),
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            role,
        };
        map.insert(
            user.id.clone(),
            StoredUser {
                user: user.clone(),
                password: password.to_string(),
            },
        );
        Ok(user)
    }
}

fn poisoned() -> ServiceFailure {
    ServiceFailure::unexpected("user store lock poisoned")
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn register(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        password: &str,
    ) -> Result<User, ServiceFailure> {
        let user = self.insert(email, first_name, last_name, password, Role::USER)?;
        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, ServiceFailure> {
        let user = {
            let map = self.inner.read().map_err(|_| poisoned())?;
            map.values()
                .find(|u| u.user.email.eq_ignore_ascii_case(email) && u.password == password)
                .map(|u| u.user.clone())
        };

        let Some(user) = user else {
            warn!("login rejected");
            return Err(ServiceError::unauthorized("Invalid credentials").into());
        };

        self.issuer
            .issue(&user.id, &user.role, Utc::now())
            .map_err(|e| ServiceFailure::unexpected(e.to_string()))
    }

    async fn get_all_users(
        &self,
        requester: &AuthenticatedIdentity,
    ) -> Result<Vec<User>, ServiceFailure> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut users: Vec<User> = map.values().map(|u| u.user.clone()).collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));

        info!(requester = %requester.user_id(), count = users.len(), "listed users");
        Ok(users)
    }

    async fn delete_user(&self, user_id: &UserId) -> Result<(), ServiceFailure> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        match map.remove(user_id) {
            Some(_) => {
                info!(user_id = %user_id, "user deleted");
                Ok(())
            }
            None => Err(ServiceError::not_found("User not found").into()),
        }
    }
}
