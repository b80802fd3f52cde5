//! Admin capability check.
//!
//! The only way to obtain an [`AdminIdentity`] is from an
//! [`AuthenticatedIdentity`], so authorization cannot run before
//! authentication.

use thiserror::Error;
use tracing::debug;

use accounts_core::{AuthenticatedIdentity, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: role '{0}' lacks the admin capability")]
    Forbidden(Role),
}

/// An authenticated identity proven to hold the admin role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity(AuthenticatedIdentity);

impl AdminIdentity {
    pub fn identity(&self) -> &AuthenticatedIdentity {
        &self.0
    }
}

/// Pure policy check: no IO, no state.
pub fn authorize_admin(identity: AuthenticatedIdentity) -> Result<AdminIdentity, AuthzError> {
    if identity.role().is_admin() {
        Ok(AdminIdentity(identity))
    } else {
        debug!(user_id = %identity.user_id(), role = %identity.role(), "admin capability denied");
        Err(AuthzError::Forbidden(identity.role().clone()))
    }
}
