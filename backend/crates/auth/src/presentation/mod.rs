//! Presentation Layer
//!
//! Route table, route guard, portal menus, notifications and form handlers.

pub mod guard;
pub mod handlers;
pub mod navigation;
pub mod notification;
pub mod route;

pub use guard::{Navigation, RouteDecision, authorize, navigate};
pub use handlers::{LoginForm, SubmitOutcome, sign_out, submit_federated_login, submit_login};
pub use navigation::{NavItem, NavSection, menu_for};
pub use notification::{Notification, NotificationLevel, SignInFlow};
pub use route::{AdminPage, ClientPage, LOGIN_PATH, Route, home_path};
