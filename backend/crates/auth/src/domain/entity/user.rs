//! User Entity
//!
//! Portal login account. This is also the shape persisted in client-local
//! storage for session restoration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{email::Email, user_id::UserId, user_role::UserRole};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: Email,
    /// Display name
    pub name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: UserId, email: Email, name: impl Into<String>, role: UserRole) -> Self {
        Self {
            id,
            email,
            name: name.into(),
            role,
            profile_picture: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_profile_picture(mut self, url: impl Into<String>) -> Self {
        self.profile_picture = Some(url.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}
