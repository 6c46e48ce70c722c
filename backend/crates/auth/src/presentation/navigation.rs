//! Portal sidebar menus

use crate::domain::value_object::user_role::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
}

/// Group of menu entries; the client portal uses a single untitled group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub title: Option<&'static str>,
    pub items: &'static [NavItem],
}

const fn item(title: &'static str, href: &'static str) -> NavItem {
    NavItem { title, href }
}

const CLIENT_MENU: &[NavSection] = &[NavSection {
    title: None,
    items: &[
        item("Dashboard", "/dashboard"),
        item("Accounts", "/accounts"),
        item("Transactions", "/transactions"),
        item("Transfer Funds", "/transfer"),
        item("Beneficiaries", "/beneficiaries"),
        item("Bank Instruments", "/instruments"),
        item("Support & Claims", "/support"),
        item("Funding Instructions", "/funding"),
        item("Settings", "/settings"),
    ],
}];

const ADMIN_MENU: &[NavSection] = &[
    NavSection {
        title: Some("Overview"),
        items: &[item("Dashboard", "/admin")],
    },
    NavSection {
        title: Some("Customer Management"),
        items: &[
            item("All Customers", "/admin/customers"),
            item("Create Customer", "/admin/customers/new"),
        ],
    },
    NavSection {
        title: Some("Account Management"),
        items: &[
            item("All Accounts", "/admin/accounts"),
            item("Create Account", "/admin/accounts/new"),
        ],
    },
    NavSection {
        title: Some("Transactions"),
        items: &[
            item("All Transactions", "/admin/transactions"),
            item("Pending Transfers", "/admin/transfers"),
            item("Deposits", "/admin/deposits"),
            item("Holds Management", "/admin/holds"),
        ],
    },
    NavSection {
        title: Some("Banking Products"),
        items: &[
            item("Certificate of Deposit", "/admin/products/cd"),
            item("SBLC", "/admin/products/sblc"),
            item("Bank Guarantees", "/admin/products/bg"),
            item("Safe Keeping Receipt", "/admin/products/skr"),
            item("Bank Certified Checks", "/admin/products/bcc"),
            item("Proof of Funds", "/admin/products/pof"),
            item("Block Funds", "/admin/products/bf"),
            item("Key Tested Telex", "/admin/products/ktt"),
            item("SWIFT Instruments", "/admin/products/swift"),
        ],
    },
    NavSection {
        title: Some("Settings"),
        items: &[
            item("Fee Table", "/admin/settings/fees"),
            item("Wallet Addresses", "/admin/settings/wallets"),
            item("CD Interest Rates", "/admin/settings/cd-rates"),
            item("Wire Settings", "/admin/settings/wire"),
            item("SMTP Config", "/admin/settings/smtp"),
            item("Generate OTP", "/admin/settings/otp"),
        ],
    },
    NavSection {
        title: Some("Reports"),
        items: &[
            item("Financial Reports", "/admin/reports/financial"),
            item("Audit Logs", "/admin/reports/audit"),
        ],
    },
];

/// Sidebar menu of a role's portal
pub const fn menu_for(role: UserRole) -> &'static [NavSection] {
    match role {
        UserRole::Client => CLIENT_MENU,
        UserRole::Admin => ADMIN_MENU,
    }
}
