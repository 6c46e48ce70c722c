//! Demo datasets
//!
//! Static sample records shipped with the portal. Nothing here is real.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::domain::entity::{
    customer::{Address, Customer},
    user::User,
};
use crate::domain::value_object::{
    customer_id::CustomerId, customer_status::CustomerStatus, customer_type::CustomerType,
    email::Email, risk_level::RiskLevel, user_id::UserId, user_role::UserRole,
};

/// Demo credentials (identifier, secret)
pub const DEMO_CREDENTIALS: [(&str, &str); 3] = [
    ("admin@prominencebank.com", "admin123"),
    ("john.doe@example.com", "client123"),
    ("jane.smith@example.com", "client456"),
];

/// Account the federated sign-in resolves to
pub const FEDERATED_DEMO_EMAIL: &str = "john.doe@example.com";

fn midnight_utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn demo_users() -> Vec<User> {
    vec![
        User::new(
            UserId::new("admin-1"),
            Email::from_static("admin@prominencebank.com"),
            "Sarah Mitchell",
            UserRole::Admin,
        )
        .with_profile_picture(
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop",
        )
        .with_created_at(midnight_utc(2024, 1, 1)),
        User::new(
            UserId::new("client-1"),
            Email::from_static("john.doe@example.com"),
            "John Doe",
            UserRole::Client,
        )
        .with_profile_picture(
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop",
        )
        .with_created_at(midnight_utc(2024, 3, 15)),
        User::new(
            UserId::new("client-2"),
            Email::from_static("jane.smith@example.com"),
            "Jane Smith",
            UserRole::Client,
        )
        .with_profile_picture(
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop",
        )
        .with_created_at(midnight_utc(2024, 5, 20)),
    ]
}

pub fn demo_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: CustomerId::new("cust-1"),
            customer_type: CustomerType::Personal,
            name: "John Doe".into(),
            email: Email::from_static("john.doe@example.com"),
            phone: "+1 (555) 123-4567".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 6, 15),
            company_name: None,
            address: Address {
                line1: "123 Wall Street".into(),
                line2: Some("Suite 400".into()),
                city: "New York".into(),
                state: "NY".into(),
                postal_code: "10005".into(),
                country: "United States".into(),
            },
            status: CustomerStatus::Active,
            risk_level: RiskLevel::Low,
            created_at: midnight_utc(2024, 3, 15),
            notes: None,
        },
        Customer {
            id: CustomerId::new("cust-2"),
            customer_type: CustomerType::Business,
            name: "Jane Smith".into(),
            email: Email::from_static("jane.smith@example.com"),
            phone: "+1 (555) 987-6543".into(),
            date_of_birth: None,
            company_name: Some("Smith Global Ventures LLC".into()),
            address: Address {
                line1: "456 Financial Plaza".into(),
                line2: None,
                city: "Los Angeles".into(),
                state: "CA".into(),
                postal_code: "90071".into(),
                country: "United States".into(),
            },
            status: CustomerStatus::Active,
            risk_level: RiskLevel::Medium,
            created_at: midnight_utc(2024, 5, 20),
            notes: None,
        },
        Customer {
            id: CustomerId::new("cust-3"),
            customer_type: CustomerType::Business,
            name: "Robert Chen".into(),
            email: Email::from_static("robert.chen@techcorp.com"),
            phone: "+1 (555) 456-7890".into(),
            date_of_birth: None,
            company_name: Some("TechCorp International".into()),
            address: Address {
                line1: "789 Innovation Drive".into(),
                line2: None,
                city: "San Francisco".into(),
                state: "CA".into(),
                postal_code: "94102".into(),
                country: "United States".into(),
            },
            status: CustomerStatus::Active,
            risk_level: RiskLevel::Low,
            created_at: midnight_utc(2024, 1, 10),
            notes: None,
        },
    ]
}
