//! Domain Entities

pub mod customer;
pub mod session;
pub mod user;

pub use customer::{Address, Customer};
pub use session::{AuthState, Session};
pub use user::User;
