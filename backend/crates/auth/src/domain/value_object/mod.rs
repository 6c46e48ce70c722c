//! Value Object Module

pub mod customer_id;
pub mod customer_status;
pub mod customer_type;
pub mod email;
pub mod risk_level;
pub mod user_id;
pub mod user_role;

pub use customer_id::CustomerId;
pub use customer_status::CustomerStatus;
pub use customer_type::CustomerType;
pub use email::Email;
pub use risk_level::RiskLevel;
pub use user_id::UserId;
pub use user_role::UserRole;
