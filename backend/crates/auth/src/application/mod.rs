//! Application Layer
//!
//! Use cases and the session holder.

pub mod config;
pub mod federated_sign_in;
pub mod restore_session;
pub mod session_holder;
pub mod sign_in;
pub mod sign_out;

// Re-exports
pub use config::AuthConfig;
pub use federated_sign_in::FederatedSignInUseCase;
pub use restore_session::RestoreSessionUseCase;
pub use session_holder::SessionHolder;
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_out::SignOutUseCase;
