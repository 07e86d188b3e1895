//! Built-in demo accounts, one per role.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::domain::entities::{Role, StoredUser, User};

/// Login hint shown on the login page
#[derive(Debug, Clone, Serialize)]
pub struct DemoAccount {
    pub role: Role,
    pub email: &'static str,
    pub password: &'static str,
}

static DEMO_USERS: Lazy<Vec<StoredUser>> = Lazy::new(|| {
    vec![
        demo_user(1, Role::Admin, "Admin Alice", "admin1@rentify.com", "1234567800", "admin123"),
        demo_user(4, Role::Owner, "Owner Diana", "owner4@rentify.com", "1234567803", "owner123"),
        demo_user(8, Role::Tenant, "Tenant Hannah", "tenant8@rentify.com", "1234567807", "tenant123"),
    ]
});

fn demo_user(id: i64, role: Role, name: &str, email: &str, phone: &str, password: &str) -> StoredUser {
    StoredUser::new(
        User {
            id,
            role,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            verified: true,
        },
        password,
    )
}

/// Demo users with their passwords; always accepted at login
pub(crate) fn demo_users() -> &'static [StoredUser] {
    &DEMO_USERS
}

/// Credentials of the demo accounts, for display
pub fn demo_accounts() -> Vec<DemoAccount> {
    vec![
        DemoAccount { role: Role::Admin, email: "admin1@rentify.com", password: "admin123" },
        DemoAccount { role: Role::Owner, email: "owner4@rentify.com", password: "owner123" },
        DemoAccount { role: Role::Tenant, email: "tenant8@rentify.com", password: "tenant123" },
    ]
}
