//! In-memory directory over the demo datasets

use std::collections::HashMap;

use crate::domain::entity::{customer::Customer, user::User};
use crate::domain::repository::{CredentialRepository, CustomerRepository, UserRepository};
use crate::error::AuthResult;
use crate::infra::demo_data::{DEMO_CREDENTIALS, demo_customers, demo_users};

/// Demo-backed credential, user and customer tables
#[derive(Debug, Clone)]
pub struct DemoDirectory {
    credentials: HashMap<String, String>,
    users: Vec<User>,
    customers: Vec<Customer>,
}

impl DemoDirectory {
    /// Directory loaded with the shipped demo datasets
    pub fn seeded() -> Self {
        Self {
            credentials: DEMO_CREDENTIALS
                .iter()
                .map(|(id, secret)| (id.to_string(), secret.to_string()))
                .collect(),
            users: demo_users(),
            customers: demo_customers(),
        }
    }
}

impl CredentialRepository for DemoDirectory {
    async fn find_secret(&self, identifier: &str) -> AuthResult<Option<String>> {
        Ok(self.credentials.get(identifier).cloned())
    }
}

impl UserRepository for DemoDirectory {
    async fn find_user_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        Ok(self.users.iter().find(|u| u.email.as_str() == email).cloned())
    }
}

impl CustomerRepository for DemoDirectory {
    async fn find_customer_by_email(&self, email: &str) -> AuthResult<Option<Customer>> {
        Ok(self
            .customers
            .iter()
            .find(|c| c.email.as_str() == email)
            .cloned())
    }
}

#[cfg(test)]
impl DemoDirectory {
    /// Drop a user record while keeping its credential
    pub(crate) fn without_user(mut self, email: &str) -> Self {
        self.users.retain(|u| u.email.as_str() != email);
        self
    }

    pub(crate) fn without_customer(mut self, email: &str) -> Self {
        self.customers.retain(|c| c.email.as_str() != email);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_role::UserRole;

    #[tokio::test]
    async fn test_seeded_lookups() {
        let dir = DemoDirectory::seeded();

        assert_eq!(
            dir.find_secret("admin@prominencebank.com").await.unwrap().as_deref(),
            Some("admin123")
        );
        assert_eq!(dir.find_secret("nobody@example.com").await.unwrap(), None);

        let user = dir
            .find_user_by_email("jane.smith@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.role, UserRole::Client);

        let customer = dir
            .find_customer_by_email("jane.smith@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(customer.id.as_str(), "cust-2");
    }

    #[tokio::test]
    async fn test_lookups_are_exact() {
        let dir = DemoDirectory::seeded();
        assert_eq!(dir.find_secret("ADMIN@prominencebank.com").await.unwrap(), None);
        assert_eq!(dir.find_secret(" admin@prominencebank.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_without_user_keeps_credential() {
        let dir = DemoDirectory::seeded().without_user("jane.smith@example.com");
        assert!(dir.find_secret("jane.smith@example.com").await.unwrap().is_some());
        assert!(
            dir.find_user_by_email("jane.smith@example.com")
                .await
                .unwrap()
                .is_none()
        );
        assert_eq!(dir.users.len(), 2);
    }
}
