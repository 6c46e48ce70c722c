use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Kind of banking customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    #[display("personal")]
    Personal,
    #[display("business")]
    Business,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_type_codes() {
        assert_eq!(CustomerType::Personal.to_string(), "personal");
        assert_eq!(
            serde_json::to_string(&CustomerType::Business).unwrap(),
            "\"business\""
        );
    }
}
