//! Session Holder
//!
//! Single owner of the portal's auth state. The shell creates one holder at
//! start-up and passes it by reference to the router and the pages; all
//! mutations go through `&mut self`, so sign-in attempts are serialized.
//!
//! ```text
//!   new() ──> Authenticating ──restore()──> Authenticated | Unauthenticated
//!   Unauthenticated ──login()──> Authenticating ──ok──> Authenticated
//!                                               └─err─> (previous state)
//!   any ──logout()──> Unauthenticated
//! ```

use std::sync::Arc;

use platform::timer::Delay;

use crate::application::config::AuthConfig;
use crate::application::federated_sign_in::FederatedSignInUseCase;
use crate::application::restore_session::RestoreSessionUseCase;
use crate::application::sign_in::{SignInInput, SignInUseCase};
use crate::application::sign_out::SignOutUseCase;
use crate::domain::entity::session::{AuthState, Session};
use crate::domain::repository::{AuthDirectory, SessionStore};
use crate::error::AuthResult;

pub struct SessionHolder<R, S, D>
where
    R: AuthDirectory,
    S: SessionStore,
    D: Delay,
{
    state: AuthState,
    sign_in: SignInUseCase<R, S, D>,
    federated_sign_in: FederatedSignInUseCase<R, S, D>,
    sign_out: SignOutUseCase<S>,
    restore: RestoreSessionUseCase<R, S>,
}

impl<R, S, D> SessionHolder<R, S, D>
where
    R: AuthDirectory,
    S: SessionStore,
    D: Delay,
{
    /// Create a holder in the `Authenticating` state; call [`restore`](Self::restore) next
    pub fn new(
        directory: Arc<R>,
        session_store: Arc<S>,
        delay: Arc<D>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            state: AuthState::Authenticating,
            sign_in: SignInUseCase::new(
                directory.clone(),
                session_store.clone(),
                delay.clone(),
                config.clone(),
            ),
            federated_sign_in: FederatedSignInUseCase::new(
                directory.clone(),
                session_store.clone(),
                delay,
                config,
            ),
            sign_out: SignOutUseCase::new(session_store.clone()),
            restore: RestoreSessionUseCase::new(directory, session_store),
        }
    }

    /// Create a holder and resolve the persisted session
    pub async fn start(
        directory: Arc<R>,
        session_store: Arc<S>,
        delay: Arc<D>,
        config: Arc<AuthConfig>,
    ) -> Self {
        let mut holder = Self::new(directory, session_store, delay, config);
        holder.restore().await;
        holder
    }

    /// Resolve the start-up `Authenticating` state from client-local storage
    pub async fn restore(&mut self) -> Option<&Session> {
        self.state = match self.restore.execute().await {
            Some(session) => AuthState::Authenticated(session),
            None => AuthState::Unauthenticated,
        };
        self.state.session()
    }

    pub async fn login(&mut self, identifier: &str, secret: &str) -> AuthResult<Session> {
        let previous = std::mem::replace(&mut self.state, AuthState::Authenticating);

        let input = SignInInput {
            identifier: identifier.to_string(),
            secret: secret.to_string(),
        };
        let result = self.sign_in.execute(input).await;
        self.settle(previous, result)
    }

    pub async fn login_with_federated_provider(&mut self) -> AuthResult<Session> {
        let previous = std::mem::replace(&mut self.state, AuthState::Authenticating);
        let result = self.federated_sign_in.execute().await;
        self.settle(previous, result)
    }

    /// Clear the session. Idempotent.
    ///
    /// The in-memory session is cleared even if removing the stored entry fails.
    pub fn logout(&mut self) -> AuthResult<()> {
        self.state = AuthState::Unauthenticated;
        self.sign_out.execute()
    }

    fn settle(&mut self, previous: AuthState, result: AuthResult<Session>) -> AuthResult<Session> {
        match result {
            Ok(session) => {
                self.state = AuthState::Authenticated(session.clone());
                Ok(session)
            }
            Err(e) => {
                e.log();
                self.state = previous;
                Err(e)
            }
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.state.session()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}
