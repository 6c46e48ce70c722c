//! Email Value Object
//!
//! Email address of a user or customer record. Records come from trusted
//! static tables or from the persisted session, so no format check is
//! applied; credential lookups compare raw strings.

use serde::{Deserialize, Serialize};

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create from a trusted static record
    pub fn from_static(email: &'static str) -> Self {
        Self(email.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_serializes_as_plain_string() {
        let email = Email::from_static("john.doe@example.com");
        assert_eq!(
            serde_json::to_string(&email).unwrap(),
            "\"john.doe@example.com\""
        );
    }

    #[test]
    fn test_email_deserializes_verbatim() {
        let email: Email = serde_json::from_str("\"Jane.Smith@Example.com\"").unwrap();
        assert_eq!(email.as_str(), "Jane.Smith@Example.com");
        assert_eq!(email.to_string(), "Jane.Smith@Example.com");
    }
}
