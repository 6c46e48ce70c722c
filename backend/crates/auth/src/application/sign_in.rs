//! Sign In Use Case
//!
//! Checks an email/password pair against the credential table and opens
//! a session.

use std::sync::Arc;

use platform::timer::Delay;

use crate::application::config::AuthConfig;
use crate::domain::entity::{customer::Customer, session::Session, user::User};
use crate::domain::repository::{AuthDirectory, CustomerRepository, SessionStore};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    /// Email as typed on the login form
    pub identifier: String,
    /// Password
    pub secret: String,
}

/// Sign in use case
pub struct SignInUseCase<R, S, D>
where
    R: AuthDirectory,
    S: SessionStore,
    D: Delay,
{
    directory: Arc<R>,
    session_store: Arc<S>,
    delay: Arc<D>,
    config: Arc<AuthConfig>,
}

impl<R, S, D> SignInUseCase<R, S, D>
where
    R: AuthDirectory,
    S: SessionStore,
    D: Delay,
{
    pub fn new(
        directory: Arc<R>,
        session_store: Arc<S>,
        delay: Arc<D>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            directory,
            session_store,
            delay,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<Session> {
        self.delay.sleep(self.config.login_delay).await;

        let expected = self
            .directory
            .find_secret(&input.identifier)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if input.secret != expected {
            return Err(AuthError::InvalidCredential);
        }

        let user = self
            .directory
            .find_user_by_email(&input.identifier)
            .await?
            .ok_or_else(|| {
                AuthError::Internal(format!(
                    "Credential without user record: {}",
                    input.identifier
                ))
            })?;

        let session = open_session(self.directory.as_ref(), self.session_store.as_ref(), user).await?;

        tracing::info!(
            subject_id = %session.subject_id(),
            role = %session.role(),
            "User signed in"
        );

        Ok(session)
    }
}

/// Persist `user` as the current session and link its customer profile
pub(crate) async fn open_session<R, S>(directory: &R, store: &S, user: User) -> AuthResult<Session>
where
    R: CustomerRepository,
    S: SessionStore,
{
    let customer = link_customer(directory, &user).await?;
    store.save(&user)?;
    Ok(Session::new(user, customer))
}

/// Customer profile of a client user, matched by email
pub(crate) async fn link_customer<R>(directory: &R, user: &User) -> AuthResult<Option<Customer>>
where
    R: CustomerRepository,
{
    if !user.role.has_customer_profile() {
        return Ok(None);
    }

    let customer = directory.find_customer_by_email(user.email.as_str()).await?;
    if customer.is_none() {
        tracing::debug!(email = %user.email, "Client user has no customer profile");
    }
    Ok(customer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_role::UserRole;
    use crate::infra::{DemoDirectory, LocalSessionStore};
    use platform::storage::MemoryStore;
    use platform::timer::RecordingDelay;
    use std::time::Duration;

    struct Fixture {
        use_case: SignInUseCase<DemoDirectory, LocalSessionStore<MemoryStore>, RecordingDelay>,
        store: Arc<LocalSessionStore<MemoryStore>>,
        delay: Arc<RecordingDelay>,
    }

    fn fixture(directory: DemoDirectory) -> Fixture {
        let config = Arc::new(AuthConfig::default());
        let store = Arc::new(LocalSessionStore::new(
            Arc::new(MemoryStore::new()),
            config.session_storage_key.clone(),
        ));
        let delay = Arc::new(RecordingDelay::new());
        Fixture {
            use_case: SignInUseCase::new(
                Arc::new(directory),
                store.clone(),
                delay.clone(),
                config,
            ),
            store,
            delay,
        }
    }

    fn input(identifier: &str, secret: &str) -> SignInInput {
        SignInInput {
            identifier: identifier.to_string(),
            secret: secret.to_string(),
        }
    }

    #[tokio::test]
    async fn test_unknown_account() {
        let f = fixture(DemoDirectory::seeded());
        let result = f.use_case.execute(input("ghost@example.com", "admin123")).await;
        assert!(matches!(result, Err(AuthError::AccountNotFound)));
        assert_eq!(f.store.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_wrong_secret() {
        let f = fixture(DemoDirectory::seeded());
        let result = f
            .use_case
            .execute(input("john.doe@example.com", "client456"))
            .await;
        assert!(matches!(result, Err(AuthError::InvalidCredential)));
        assert_eq!(f.store.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_client_sign_in_links_customer_and_persists() {
        let f = fixture(DemoDirectory::seeded());
        let session = f
            .use_case
            .execute(input("jane.smith@example.com", "client456"))
            .await
            .unwrap();

        assert_eq!(session.role(), UserRole::Client);
        assert_eq!(session.customer().unwrap().id.as_str(), "cust-2");
        assert_eq!(f.store.load().unwrap().as_ref(), Some(session.user()));
        assert_eq!(f.delay.requested(), vec![Duration::from_millis(1000)]);
    }

    #[tokio::test]
    async fn test_admin_sign_in_has_no_customer() {
        let f = fixture(DemoDirectory::seeded());
        let session = f
            .use_case
            .execute(input("admin@prominencebank.com", "admin123"))
            .await
            .unwrap();

        assert_eq!(session.role(), UserRole::Admin);
        assert!(session.customer().is_none());
    }

    #[tokio::test]
    async fn test_credential_without_user_is_internal() {
        let f = fixture(DemoDirectory::seeded().without_user("john.doe@example.com"));
        let result = f
            .use_case
            .execute(input("john.doe@example.com", "client123"))
            .await;
        assert!(matches!(result, Err(AuthError::Internal(_))));
        assert_eq!(f.store.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_client_without_customer_profile_still_signs_in() {
        let f = fixture(DemoDirectory::seeded().without_customer("john.doe@example.com"));
        let session = f
            .use_case
            .execute(input("john.doe@example.com", "client123"))
            .await
            .unwrap();
        assert!(session.customer().is_none());
    }
}
