//! `accounts-core` — domain building blocks for the user-account API.
//!
//! This crate contains **pure domain** primitives and the `UserService` port
//! (no HTTP, no storage).

pub mod error;
pub mod id;
pub mod identity;
pub mod role;
pub mod service;
pub mod user;

pub use error::{DomainError, ServiceError, ServiceFailure};
pub use id::UserId;
pub use identity::AuthenticatedIdentity;
pub use role::Role;
pub use service::UserService;
pub use user::User;
