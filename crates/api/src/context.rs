//! Per-request identity values produced by the gates.
//!
//! These are immutable and travel by value from one gate to the next; nothing
//! is stashed on a shared request object.

use accounts_auth::{AdminIdentity, AuthenticatedIdentity};

/// Output of the authentication gate (see [`crate::middleware`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticated(pub AuthenticatedIdentity);

/// Output of the authorization gate (see [`crate::authz`]).
///
/// Only obtainable from an [`Authenticated`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin(pub AdminIdentity);

impl Admin {
    pub fn identity(&self) -> &AuthenticatedIdentity {
        self.0.identity()
    }
}
