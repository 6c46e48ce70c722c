//! Auth (Authentication) Portal Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and the session holder
//! - `infra/` - Demo directory and local session storage
//! - `presentation/` - Route table, route guard, menus, notifications
//!
//! ## Features
//! - Email + password sign-in against the static demo credential table
//! - Federated ("Sign in with Google") demo sign-in
//! - Session persisted in client-local storage and restored on start
//! - Role-gated client and admin portal route trees
//!
//! ## Security Model
//! None. Credentials are plaintext demo values compared by equality and the
//! session record is trusted as stored. This gate only routes demo users
//! to the right portal.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::session_holder::SessionHolder;
pub use error::{AuthError, AuthResult};
pub use infra::demo_directory::DemoDirectory;
pub use infra::local_session_store::LocalSessionStore;

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}

pub mod router {
    pub use crate::presentation::guard::*;
    pub use crate::presentation::route::*;
}
