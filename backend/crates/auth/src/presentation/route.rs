//! Route Table
//!
//! Typed routes for the public entry page and the two portal trees.
//! Unknown paths resolve to [`Route::NotFound`].

use std::fmt;

use crate::domain::value_object::user_role::UserRole;

/// Public entry route (the login page)
pub const LOGIN_PATH: &str = "/";

const CLIENT_HOME: &str = "/dashboard";
const ADMIN_HOME: &str = "/admin";

/// Landing page of a role's portal
pub const fn home_path(role: UserRole) -> &'static str {
    match role {
        UserRole::Client => CLIENT_HOME,
        UserRole::Admin => ADMIN_HOME,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientPage {
    Dashboard,
    Accounts,
    AccountDetail(String),
    Transactions,
    Transfer,
    Beneficiaries,
    Instruments,
    Support,
    Funding,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminPage {
    Overview,
    Customers,
    NewCustomer,
    CustomerDetail(String),
    Accounts,
    NewAccount,
    AccountDetail(String),
    Transactions,
    Transfers,
    Deposits,
    Holds,
    /// `/admin/products/:type`
    Product(String),
    /// `/admin/settings/:section`
    Settings(String),
    /// `/admin/reports/:type`
    Report(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Client(ClientPage),
    Admin(AdminPage),
    NotFound,
}

impl Route {
    /// Resolve a location path
    ///
    /// Query strings and fragments are ignored, as is a single trailing slash.
    pub fn resolve(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        if trimmed.is_empty() {
            return Route::Login;
        }
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Route::NotFound;
        };

        let segments: Vec<&str> = rest.split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Route::NotFound;
        }

        match segments.as_slice() {
            ["admin", tail @ ..] => resolve_admin(tail)
                .map(Route::Admin)
                .unwrap_or(Route::NotFound),
            _ => resolve_client(&segments)
                .map(Route::Client)
                .unwrap_or(Route::NotFound),
        }
    }

    /// Canonical path of this route; `NotFound` has none
    pub fn path(&self) -> Option<String> {
        let path = match self {
            Route::Login => LOGIN_PATH.to_string(),
            Route::Client(page) => client_path(page),
            Route::Admin(page) => admin_path(page),
            Route::NotFound => return None,
        };
        Some(path)
    }

    /// Role a session must hold to enter this route; `None` for public routes
    pub fn required_role(&self) -> Option<UserRole> {
        match self {
            Route::Client(_) => Some(UserRole::Client),
            Route::Admin(_) => Some(UserRole::Admin),
            Route::Login | Route::NotFound => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(path) => f.write_str(&path),
            None => f.write_str("<not found>"),
        }
    }
}

fn resolve_client(segments: &[&str]) -> Option<ClientPage> {
    let page = match segments {
        ["dashboard"] => ClientPage::Dashboard,
        ["accounts"] => ClientPage::Accounts,
        ["accounts", id] => ClientPage::AccountDetail(id.to_string()),
        ["transactions"] => ClientPage::Transactions,
        ["transfer"] => ClientPage::Transfer,
        ["beneficiaries"] => ClientPage::Beneficiaries,
        ["instruments"] => ClientPage::Instruments,
        ["support"] => ClientPage::Support,
        ["funding"] => ClientPage::Funding,
        ["settings"] => ClientPage::Settings,
        _ => return None,
    };
    Some(page)
}

fn resolve_admin(segments: &[&str]) -> Option<AdminPage> {
    let page = match segments {
        [] => AdminPage::Overview,
        ["customers"] => AdminPage::Customers,
        ["customers", "new"] => AdminPage::NewCustomer,
        ["customers", id] => AdminPage::CustomerDetail(id.to_string()),
        ["accounts"] => AdminPage::Accounts,
        ["accounts", "new"] => AdminPage::NewAccount,
        ["accounts", id] => AdminPage::AccountDetail(id.to_string()),
        ["transactions"] => AdminPage::Transactions,
        ["transfers"] => AdminPage::Transfers,
        ["deposits"] => AdminPage::Deposits,
        ["holds"] => AdminPage::Holds,
        ["products", kind] => AdminPage::Product(kind.to_string()),
        ["settings", section] => AdminPage::Settings(section.to_string()),
        ["reports", kind] => AdminPage::Report(kind.to_string()),
        _ => return None,
    };
    Some(page)
}

fn client_path(page: &ClientPage) -> String {
    match page {
        ClientPage::Dashboard => CLIENT_HOME.to_string(),
        ClientPage::Accounts => "/accounts".to_string(),
        ClientPage::AccountDetail(id) => format!("/accounts/{id}"),
        ClientPage::Transactions => "/transactions".to_string(),
        ClientPage::Transfer => "/transfer".to_string(),
        ClientPage::Beneficiaries => "/beneficiaries".to_string(),
        ClientPage::Instruments => "/instruments".to_string(),
        ClientPage::Support => "/support".to_string(),
        ClientPage::Funding => "/funding".to_string(),
        ClientPage::Settings => "/settings".to_string(),
    }
}

fn admin_path(page: &AdminPage) -> String {
    match page {
        AdminPage::Overview => ADMIN_HOME.to_string(),
        AdminPage::Customers => "/admin/customers".to_string(),
        AdminPage::NewCustomer => "/admin/customers/new".to_string(),
        AdminPage::CustomerDetail(id) => format!("/admin/customers/{id}"),
        AdminPage::Accounts => "/admin/accounts".to_string(),
        AdminPage::NewAccount => "/admin/accounts/new".to_string(),
        AdminPage::AccountDetail(id) => format!("/admin/accounts/{id}"),
        AdminPage::Transactions => "/admin/transactions".to_string(),
        AdminPage::Transfers => "/admin/transfers".to_string(),
        AdminPage::Deposits => "/admin/deposits".to_string(),
        AdminPage::Holds => "/admin/holds".to_string(),
        AdminPage::Product(kind) => format!("/admin/products/{kind}"),
        AdminPage::Settings(section) => format!("/admin/settings/{section}"),
        AdminPage::Report(kind) => format!("/admin/reports/{kind}"),
    }
}
