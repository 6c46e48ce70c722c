//! Route Guard
//!
//! Admits or redirects navigation into the role-gated portal trees.
//! Runs on every navigation and reads only the current auth state.

use crate::domain::entity::session::{AuthState, Session};
use crate::domain::value_object::user_role::UserRole;
use crate::presentation::route::{LOGIN_PATH, Route, home_path};

/// Outcome of checking a session against a subtree's required role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Admit,
    Redirect(&'static str),
}

/// Decide whether `session` may enter a subtree that requires `required`
///
/// No session and a role mismatch both redirect to the login page.
pub fn authorize(session: Option<&Session>, required: UserRole) -> RouteDecision {
    let Some(session) = session else {
        return RouteDecision::Redirect(LOGIN_PATH);
    };

    match (session.role(), required) {
        (UserRole::Client, UserRole::Client) | (UserRole::Admin, UserRole::Admin) => {
            RouteDecision::Admit
        }
        (UserRole::Client, UserRole::Admin) | (UserRole::Admin, UserRole::Client) => {
            RouteDecision::Redirect(LOGIN_PATH)
        }
    }
}

/// What the shell should show for a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(&'static str),
    /// Auth state not resolved yet; show the loader
    Pending,
}

/// Resolve `path` and apply the guard for the current state
pub fn navigate(state: &AuthState, path: &str) -> Navigation {
    let route = Route::resolve(path);

    let Some(required) = route.required_role() else {
        return match (&route, state.session()) {
            (Route::Login, Some(session)) => Navigation::Redirect(home_path(session.role())),
            _ => Navigation::Render(route),
        };
    };

    if state.is_loading() {
        return Navigation::Pending;
    }

    match authorize(state.session(), required) {
        RouteDecision::Admit => Navigation::Render(route),
        RouteDecision::Redirect(to) => {
            tracing::debug!(path, required = %required, role = ?state.role(), "Route access denied");
            Navigation::Redirect(to)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user::User;
    use crate::domain::value_object::{email::Email, user_id::UserId};
    use crate::presentation::route::{AdminPage, ClientPage};

    fn session(role: UserRole) -> Session {
        let user = User::new(
            UserId::new("u-1"),
            Email::from_static("someone@example.com"),
            "Someone",
            role,
        );
        Session::new(user, None)
    }

    #[test]
    fn test_authorize_matrix() {
        let client = session(UserRole::Client);
        let admin = session(UserRole::Admin);

        assert_eq!(
            authorize(None, UserRole::Client),
            RouteDecision::Redirect(LOGIN_PATH)
        );
        assert_eq!(
            authorize(None, UserRole::Admin),
            RouteDecision::Redirect(LOGIN_PATH)
        );
        assert_eq!(authorize(Some(&client), UserRole::Client), RouteDecision::Admit);
        assert_eq!(
            authorize(Some(&client), UserRole::Admin),
            RouteDecision::Redirect(LOGIN_PATH)
        );
        assert_eq!(authorize(Some(&admin), UserRole::Admin), RouteDecision::Admit);
        assert_eq!(
            authorize(Some(&admin), UserRole::Client),
            RouteDecision::Redirect(LOGIN_PATH)
        );
    }

    #[test]
    fn test_navigate_unauthenticated() {
        let state = AuthState::Unauthenticated;
        assert_eq!(navigate(&state, "/"), Navigation::Render(Route::Login));
        assert_eq!(navigate(&state, "/dashboard"), Navigation::Redirect(LOGIN_PATH));
        assert_eq!(navigate(&state, "/admin/holds"), Navigation::Redirect(LOGIN_PATH));
        assert_eq!(navigate(&state, "/missing"), Navigation::Render(Route::NotFound));
    }

    #[test]
    fn test_navigate_pending_while_authenticating() {
        let state = AuthState::Authenticating;
        assert_eq!(navigate(&state, "/dashboard"), Navigation::Pending);
        assert_eq!(navigate(&state, "/admin"), Navigation::Pending);
        assert_eq!(navigate(&state, "/"), Navigation::Render(Route::Login));
    }

    #[test]
    fn test_navigate_authenticated() {
        let client = AuthState::Authenticated(session(UserRole::Client));
        assert_eq!(
            navigate(&client, "/accounts/acc-1"),
            Navigation::Render(Route::Client(ClientPage::AccountDetail("acc-1".into())))
        );
        assert_eq!(navigate(&client, "/admin"), Navigation::Redirect(LOGIN_PATH));
        assert_eq!(navigate(&client, "/"), Navigation::Redirect("/dashboard"));

        let admin = AuthState::Authenticated(session(UserRole::Admin));
        assert_eq!(
            navigate(&admin, "/admin/deposits"),
            Navigation::Render(Route::Admin(AdminPage::Deposits))
        );
        assert_eq!(navigate(&admin, "/transfer"), Navigation::Redirect(LOGIN_PATH));
        assert_eq!(navigate(&admin, "/"), Navigation::Redirect("/admin"));
    }
}
