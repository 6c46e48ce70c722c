//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use crate::infra::demo_data::FEDERATED_DEMO_EMAIL;
use crate::infra::local_session_store::SESSION_STORAGE_KEY;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Client-local storage key of the persisted session
    pub session_storage_key: String,
    /// Simulated latency of email/password sign-in
    pub login_delay: Duration,
    /// Simulated latency of federated sign-in
    pub federated_login_delay: Duration,
    /// Account the federated sign-in resolves to
    pub federated_email: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_storage_key: SESSION_STORAGE_KEY.to_string(),
            login_delay: Duration::from_millis(1000),
            federated_login_delay: Duration::from_millis(1500),
            federated_email: FEDERATED_DEMO_EMAIL.to_string(),
        }
    }
}

impl AuthConfig {
    /// Config without simulated latency (tests, scripted runs)
    pub fn instant() -> Self {
        Self {
            login_delay: Duration::ZERO,
            federated_login_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    pub fn login_delay_ms(&self) -> u64 {
        self.login_delay.as_millis() as u64
    }

    pub fn federated_login_delay_ms(&self) -> u64 {
        self.federated_login_delay.as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.session_storage_key, "prominence_user");
        assert_eq!(config.login_delay_ms(), 1000);
        assert_eq!(config.federated_login_delay_ms(), 1500);
        assert_eq!(config.federated_email, "john.doe@example.com");
    }

    #[test]
    fn test_instant() {
        let config = AuthConfig::instant();
        assert_eq!(config.login_delay, Duration::ZERO);
        assert_eq!(config.federated_login_delay, Duration::ZERO);
        assert_eq!(config.session_storage_key, "prominence_user");
    }
}
