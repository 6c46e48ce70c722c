//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{AuthState, Customer, Session, User};
pub use repository::{
    AuthDirectory, CredentialRepository, CustomerRepository, SessionStore, UserRepository,
};
