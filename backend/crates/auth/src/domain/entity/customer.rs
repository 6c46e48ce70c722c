//! Customer Entity
//!
//! Banking customer profile linked to a client user by email.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    customer_id::CustomerId, customer_status::CustomerStatus, customer_type::CustomerType,
    email::Email, risk_level::RiskLevel,
};

/// Postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    /// Single-line rendering used in profile headers
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.line1.as_str()];
        if let Some(line2) = &self.line2 {
            parts.push(line2);
        }
        format!(
            "{}, {}, {} {}, {}",
            parts.join(", "),
            self.city,
            self.state,
            self.postal_code,
            self.country
        )
    }
}

/// Customer entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    #[serde(rename = "type")]
    pub customer_type: CustomerType,
    pub name: String,
    pub email: Email,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub address: Address,
    pub status: CustomerStatus,
    pub risk_level: RiskLevel,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Customer {
    /// Name shown in portal headers: company name for businesses
    pub fn display_name(&self) -> &str {
        match (&self.customer_type, &self.company_name) {
            (CustomerType::Business, Some(company)) => company,
            _ => &self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(line2: Option<&str>) -> Address {
        Address {
            line1: "123 Wall Street".into(),
            line2: line2.map(str::to_string),
            city: "New York".into(),
            state: "NY".into(),
            postal_code: "10005".into(),
            country: "United States".into(),
        }
    }

    #[test]
    fn test_address_one_line() {
        assert_eq!(
            address(Some("Suite 400")).one_line(),
            "123 Wall Street, Suite 400, New York, NY 10005, United States"
        );
        assert_eq!(
            address(None).one_line(),
            "123 Wall Street, New York, NY 10005, United States"
        );
    }

    #[test]
    fn test_display_name_prefers_company() {
        let mut customer = Customer {
            id: CustomerId::new("cust-2"),
            customer_type: CustomerType::Business,
            name: "Jane Smith".into(),
            email: Email::from_static("jane.smith@example.com"),
            phone: "+1 (555) 987-6543".into(),
            date_of_birth: None,
            company_name: Some("Smith Global Ventures LLC".into()),
            address: address(None),
            status: CustomerStatus::Active,
            risk_level: RiskLevel::Medium,
            created_at: Utc::now(),
            notes: None,
        };
        assert_eq!(customer.display_name(), "Smith Global Ventures LLC");

        customer.customer_type = CustomerType::Personal;
        assert_eq!(customer.display_name(), "Jane Smith");
    }
}
