//! Federated Sign In Use Case
//!
//! Stand-in for a third-party identity provider: always resolves to the
//! configured demo client account.

use std::sync::Arc;

use platform::timer::Delay;

use crate::application::config::AuthConfig;
use crate::application::sign_in::open_session;
use crate::domain::entity::session::Session;
use crate::domain::repository::{AuthDirectory, SessionStore};
use crate::error::{AuthError, AuthResult};

pub struct FederatedSignInUseCase<R, S, D>
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

impl<R, S, D> FederatedSignInUseCase<R, S, D>
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

    pub async fn execute(&self) -> AuthResult<Session> {
        self.delay.sleep(self.config.federated_login_delay).await;

        let user = self
            .directory
            .find_user_by_email(&self.config.federated_email)
            .await?
            .ok_or_else(|| {
                AuthError::Internal(format!(
                    "Federated demo account missing: {}",
                    self.config.federated_email
                ))
            })?;

        let session = open_session(self.directory.as_ref(), self.session_store.as_ref(), user).await?;

        tracing::info!(
            subject_id = %session.subject_id(),
            provider = "google",
            "User signed in with federated provider"
        );

        Ok(session)
    }
}
