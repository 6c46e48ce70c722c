//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::storage::StorageError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password left empty on the login form
    #[error("Email and password are required")]
    MissingCredentials,

    /// Identifier is not in the credential table
    #[error("Account not found")]
    AccountNotFound,

    /// Identifier is known but the secret does not match
    #[error("Invalid credential")]
    InvalidCredential,

    /// Credential table and user table disagree
    #[error("Internal error: {0}")]
    Internal(String),

    /// Persisted session entry could not be parsed
    #[error("Malformed session: {0}")]
    MalformedSession(String),

    /// Client-local storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredentials => ErrorKind::BadRequest,
            AuthError::AccountNotFound => ErrorKind::NotFound,
            AuthError::InvalidCredential => ErrorKind::Unauthorized,
            AuthError::Internal(_) => ErrorKind::Internal,
            AuthError::MalformedSession(_) => ErrorKind::Corrupted,
            AuthError::Storage(_) => ErrorKind::Unavailable,
        }
    }

    /// Message shown to the user in a transient notification
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials => "Please enter your email and password",
            AuthError::AccountNotFound => "Account not found. Please check your email.",
            AuthError::InvalidCredential => "Incorrect password. Please try again.",
            AuthError::Internal(_)
            | AuthError::MalformedSession(_)
            | AuthError::Storage(_) => "An error occurred. Please try again.",
        }
    }

    /// Whether this error is recovered without telling the user
    pub fn is_silent(&self) -> bool {
        matches!(self, AuthError::MalformedSession(_))
    }

    /// User-facing form of this error, as shown in a notification
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.user_message())
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::InvalidCredential => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::MalformedSession(reason) => {
                tracing::warn!(reason = %reason, "Ignoring malformed persisted session");
            }
            _ if self.kind().is_internal() => {
                tracing::error!(kind = %self.kind(), error = %self, "Auth internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}
