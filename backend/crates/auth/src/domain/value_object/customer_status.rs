use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Customer relationship status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    #[default]
    #[display("active")]
    Active,
    #[display("suspended")]
    Suspended,
    #[display("frozen")]
    Frozen,
    #[display("closed")]
    Closed,
}

impl CustomerStatus {
    #[inline]
    pub const fn is_active(&self) -> bool {
        matches!(self, CustomerStatus::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_status_serde() {
        let status: CustomerStatus = serde_json::from_str("\"frozen\"").unwrap();
        assert_eq!(status, CustomerStatus::Frozen);
        assert_eq!(status.to_string(), "frozen");
        assert!(!status.is_active());
        assert!(CustomerStatus::default().is_active());
    }
}
