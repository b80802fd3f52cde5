use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use thiserror::Error;

use accounts_core::{Role, UserId};

use crate::claims::JwtClaims;

#[derive(Debug, Error)]
#[error("failed to issue token: {0}")]
pub struct TokenIssueError(#[from] jsonwebtoken::errors::Error);

/// Issues bearer tokens for authenticated users.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user_id: &UserId, role: &Role, now: DateTime<Utc>) -> Result<String, TokenIssueError>;
}

/// HS256 (shared secret) JWT issuer; pairs with [`crate::Hs256JwtValidator`].
#[derive(Clone)]
pub struct Hs256TokenIssuer {
    key: EncodingKey,
    ttl: Duration,
}

impl Hs256TokenIssuer {
    pub fn new(secret: impl AsRef<[u8]>, ttl: Duration) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.as_ref()),
            ttl,
        }
    }
}

impl TokenIssuer for Hs256TokenIssuer {
    fn issue(&self, user_id: &UserId, role: &Role, now: DateTime<Utc>) -> Result<String, TokenIssueError> {
        let claims = JwtClaims::new(user_id.clone(), role.clone(), now, self.ttl);
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.key)?)
    }
}
