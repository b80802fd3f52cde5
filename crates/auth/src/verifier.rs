//! Bearer credential verification.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};

use accounts_core::AuthenticatedIdentity;

use crate::claims::{JwtClaims, TokenValidationError, validate_claims};

/// Verifies a bearer token and yields the identity it was issued for.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticatedIdentity, TokenValidationError>;
}

/// HS256 (shared secret) JWT verifier.
#[derive(Clone)]
pub struct Hs256JwtValidator {
    key: DecodingKey,
    validation: Validation,
}

impl Hs256JwtValidator {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Time checks run in `validate_claims` against the caller's clock.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["sub", "iat", "exp"]);

        Self {
            key: DecodingKey::from_secret(secret.as_ref()),
            validation,
        }
    }

    fn decode_claims(&self, token: &str) -> Result<JwtClaims, TokenValidationError> {
        decode::<JwtClaims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenValidationError::BadSignature,
                _ => TokenValidationError::Malformed(e.to_string()),
            })
    }
}

#[async_trait]
impl CredentialVerifier for Hs256JwtValidator {
    async fn verify(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticatedIdentity, TokenValidationError> {
        let claims = self.decode_claims(token)?;
        validate_claims(&claims, now)?;
        Ok(claims.into_identity())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use accounts_core::Role;

    use super::*;
    use crate::issuer::{Hs256TokenIssuer, TokenIssuer};

    #[tokio::test]
    async fn verifies_tokens_from_the_matching_issuer() {
        let now = Utc::now();
        let issuer = Hs256TokenIssuer::new("secret", Duration::minutes(10));
        let token = issuer.issue(&"u-1".parse().unwrap(), &Role::ADMIN, now).unwrap();

        let identity = Hs256JwtValidator::new("secret").verify(&token, now).await.unwrap();
        assert_eq!(identity.user_id().as_str(), "u-1");
        assert!(identity.role().is_admin());
    }

    #[tokio::test]
    async fn rejects_tokens_signed_with_another_secret() {
        let now = Utc::now();
        let issuer = Hs256TokenIssuer::new("other", Duration::minutes(10));
        let token = issuer.issue(&"u-1".parse().unwrap(), &Role::USER, now).unwrap();

        let err = Hs256JwtValidator::new("secret").verify(&token, now).await.unwrap_err();
        assert_eq!(err, TokenValidationError::BadSignature);
    }

    #[tokio::test]
    async fn rejects_expired_tokens() {
        let now = Utc::now();
        let issuer = Hs256TokenIssuer::new("secret", Duration::minutes(1));
        let token = issuer.issue(&"u-1".parse().unwrap(), &Role::USER, now).unwrap();

        let err = Hs256JwtValidator::new("secret")
            .verify(&token, now + Duration::minutes(2))
            .await
            .unwrap_err();
        assert_eq!(err, TokenValidationError::Expired);
    }

    #[tokio::test]
    async fn rejects_garbage() {
        let err = Hs256JwtValidator::new("secret")
            .verify("not-a-jwt", Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, TokenValidationError::Malformed(_)));
    }
}
