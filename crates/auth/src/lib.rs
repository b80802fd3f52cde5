//! `accounts-auth` — authentication/authorization boundary.
//!
//! This crate is decoupled from HTTP and storage: it turns bearer tokens into
//! identities and identities into admin capabilities.

pub mod authorize;
pub mod claims;
pub mod issuer;
pub mod verifier;

pub use accounts_core::{AuthenticatedIdentity, Role, UserId};
pub use authorize::{AdminIdentity, AuthzError, authorize_admin};
pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use issuer::{Hs256TokenIssuer, TokenIssueError, TokenIssuer};
pub use verifier::{CredentialVerifier, Hs256JwtValidator};
