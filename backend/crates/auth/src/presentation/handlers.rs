//! Sign-in / sign-out handlers
//!
//! Glue between the login page and the session holder: validate the form,
//! run the flow, then map the result to a toast and a redirect.

use platform::timer::Delay;

use crate::application::session_holder::SessionHolder;
use crate::domain::repository::{AuthDirectory, SessionStore};
use crate::error::{AuthError, AuthResult};
use crate::presentation::notification::{Notification, SignInFlow};
use crate::presentation::route::{LOGIN_PATH, home_path};

/// Login form input
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> AuthResult<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(())
    }
}

/// What the page does after a handler ran
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitOutcome {
    pub notification: Option<Notification>,
    pub redirect: Option<&'static str>,
}

impl SubmitOutcome {
    fn failed(err: &AuthError, flow: SignInFlow) -> Self {
        Self {
            notification: Notification::for_error(err, flow),
            redirect: None,
        }
    }
}

/// Submit the email/password form
pub async fn submit_login<R, S, D>(
    holder: &mut SessionHolder<R, S, D>,
    form: &LoginForm,
) -> SubmitOutcome
where
    R: AuthDirectory,
    S: SessionStore,
    D: Delay,
{
    if let Err(e) = form.validate() {
        return SubmitOutcome::failed(&e, SignInFlow::Password);
    }

    match holder.login(&form.email, &form.password).await {
        Ok(session) => SubmitOutcome {
            notification: Some(Notification::welcome()),
            redirect: Some(home_path(session.role())),
        },
        Err(e) => SubmitOutcome::failed(&e, SignInFlow::Password),
    }
}

/// "Sign in with Google"
pub async fn submit_federated_login<R, S, D>(holder: &mut SessionHolder<R, S, D>) -> SubmitOutcome
where
    R: AuthDirectory,
    S: SessionStore,
    D: Delay,
{
    match holder.login_with_federated_provider().await {
        Ok(session) => SubmitOutcome {
            notification: Some(Notification::welcome()),
            redirect: Some(home_path(session.role())),
        },
        Err(e) => SubmitOutcome::failed(&e, SignInFlow::Federated),
    }
}

/// Sign out and return to the login page
///
/// The redirect happens even when the stored entry could not be removed.
pub fn sign_out<R, S, D>(holder: &mut SessionHolder<R, S, D>) -> SubmitOutcome
where
    R: AuthDirectory,
    S: SessionStore,
    D: Delay,
{
    let notification = match holder.logout() {
        Ok(()) => None,
        Err(e) => {
            e.log();
            Some(Notification::from(&e.to_app_error()))
        }
    };

    SubmitOutcome {
        notification,
        redirect: Some(LOGIN_PATH),
    }
}
