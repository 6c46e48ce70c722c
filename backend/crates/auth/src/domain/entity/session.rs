//! Session Entity
//!
//! The currently authenticated actor, plus the holder-level auth state.

use crate::domain::entity::{customer::Customer, user::User};
use crate::domain::value_object::{email::Email, user_id::UserId, user_role::UserRole};

/// Authenticated session
///
/// Only constructed after a successful credential check or from a restored
/// record. Fields are private so the role cannot change for the lifetime
/// of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
    customer: Option<Customer>,
}

impl Session {
    pub fn new(user: User, customer: Option<Customer>) -> Self {
        Self { user, customer }
    }

    /// Subject identifier
    pub fn subject_id(&self) -> &UserId {
        &self.user.id
    }

    pub fn display_name(&self) -> &str {
        &self.user.name
    }

    pub fn email(&self) -> &Email {
        &self.user.email
    }

    pub fn role(&self) -> UserRole {
        self.user.role
    }

    /// Linked customer profile (client sessions only)
    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    /// The persisted user record
    pub fn user(&self) -> &User {
        &self.user
    }
}

/// Auth state of the session holder
///
/// `Authenticating` is transient: it covers restoration at start-up and
/// the simulated latency of sign-in calls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    Unauthenticated,
    #[default]
    Authenticating,
    Authenticated(Session),
}

impl AuthState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Authenticated(session) => Some(session),
            AuthState::Unauthenticated | AuthState::Authenticating => None,
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        self.session().map(Session::role)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Authenticating)
    }
}
