//! Transient notifications (toasts) raised by the sign-in flows

use std::fmt;

use kernel::error::app_error::AppError;

use crate::error::AuthError;

const FEDERATED_FAILURE: &str = "Google sign-in failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Which sign-in path raised an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInFlow {
    Password,
    Federated,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn welcome() -> Self {
        Self::success("Welcome back!")
    }

    /// Toast for a failed sign-in; `None` for errors recovered silently
    pub fn for_error(err: &AuthError, flow: SignInFlow) -> Option<Self> {
        if err.is_silent() {
            return None;
        }
        let app_error = match flow {
            SignInFlow::Password => err.to_app_error(),
            SignInFlow::Federated => AppError::new(err.kind(), FEDERATED_FAILURE),
        };
        Some(Self::from(&app_error))
    }
}

impl From<&AppError> for Notification {
    fn from(err: &AppError) -> Self {
        Self::error(err.message())
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            NotificationLevel::Success => write!(f, "[ok] {}", self.message),
            NotificationLevel::Error => write!(f, "[error] {}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_flow_messages() {
        let n = Notification::for_error(&AuthError::AccountNotFound, SignInFlow::Password).unwrap();
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(n.message, "Account not found. Please check your email.");

        let n = Notification::for_error(&AuthError::InvalidCredential, SignInFlow::Password).unwrap();
        assert_eq!(n.message, "Incorrect password. Please try again.");

        let n = Notification::for_error(&AuthError::Internal("x".into()), SignInFlow::Password)
            .unwrap();
        assert_eq!(n.message, "An error occurred. Please try again.");
    }

    #[test]
    fn test_federated_flow_message() {
        let n = Notification::for_error(&AuthError::Internal("x".into()), SignInFlow::Federated)
            .unwrap();
        assert_eq!(n.message, "Google sign-in failed. Please try again.");
    }

    #[test]
    fn test_silent_errors_raise_nothing() {
        let err = AuthError::MalformedSession("eof".into());
        assert_eq!(Notification::for_error(&err, SignInFlow::Password), None);
    }

    #[test]
    fn test_from_app_error_uses_user_message() {
        let app_error = AuthError::Storage(platform::storage::StorageError::Poisoned).to_app_error();
        let n = Notification::from(&app_error);
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(n.message, "An error occurred. Please try again.");
    }

    #[test]
    fn test_display() {
        assert_eq!(Notification::welcome().to_string(), "[ok] Welcome back!");
        assert_eq!(Notification::error("nope").to_string(), "[error] nope");
    }
}
