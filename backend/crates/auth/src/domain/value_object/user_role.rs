use serde::{Deserialize, Serialize};
use std::fmt;

/// Portal role of a user
///
/// Closed set: every role check must handle both variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Client,
    Admin,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserRole::Client => "client",
            UserRole::Admin => "admin",
        }
    }

    /// Whether a linked customer profile is expected for this role
    #[inline]
    pub const fn has_customer_profile(&self) -> bool {
        matches!(self, UserRole::Client)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::Client.to_string(), "client");
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }

    #[test]
    fn test_user_role_serde() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        let role: UserRole = serde_json::from_str("\"client\"").unwrap();
        assert_eq!(role, UserRole::Client);
        assert!(serde_json::from_str::<UserRole>("\"root\"").is_err());
    }

    #[test]
    fn test_user_role_checks() {
        assert!(UserRole::Client.has_customer_profile());
        assert!(!UserRole::Admin.has_customer_profile());
    }
}
