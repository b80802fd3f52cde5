//! User account as exposed to API callers.

use serde::{Deserialize, Serialize};

use crate::{Role, UserId};

/// Public view of a user account. Never carries credential material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}
