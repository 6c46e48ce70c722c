//! Repository Traits
//!
//! Interfaces for the demo datasets and the persisted session entry.
//! Implementations are in the infrastructure layer.

use crate::domain::entity::{customer::Customer, user::User};
use crate::error::AuthResult;

/// Credential table: identifier -> plaintext secret
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Find the secret registered for an identifier (exact match)
    async fn find_secret(&self, identifier: &str) -> AuthResult<Option<String>>;
}

/// User table
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by email (exact match)
    async fn find_user_by_email(&self, email: &str) -> AuthResult<Option<User>>;
}

/// Customer profile table
#[trait_variant::make(CustomerRepository: Send)]
pub trait LocalCustomerRepository {
    /// Find the customer profile whose email matches
    async fn find_customer_by_email(&self, email: &str) -> AuthResult<Option<Customer>>;
}

/// Combined lookup over all three static tables
pub trait AuthDirectory: CredentialRepository + UserRepository + CustomerRepository {}

impl<T> AuthDirectory for T where T: CredentialRepository + UserRepository + CustomerRepository {}

/// Persisted session entry in client-local storage
///
/// Synchronous, like the browser storage it stands in for.
pub trait SessionStore: Send + Sync {
    /// Read the stored user record.
    /// Returns `AuthError::MalformedSession` if the entry cannot be parsed.
    fn load(&self) -> AuthResult<Option<User>>;

    /// Store the user record, overwriting any previous entry
    fn save(&self, user: &User) -> AuthResult<()>;

    /// Remove the entry; a missing entry is not an error
    fn clear(&self) -> AuthResult<()>;
}
