//! Infrastructure layer: adapters implementing the domain ports.

pub mod users;

pub use users::InMemoryUserService;
