use serde::{Deserialize, Serialize};

use crate::{Role, UserId};

/// Identity established by verifying a bearer credential.
///
/// Lives for a single request and is never persisted by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedIdentity {
    user_id: UserId,
    role: Role,
}

impl AuthenticatedIdentity {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn role(&self) -> &Role {
        &self.role
    }
}
