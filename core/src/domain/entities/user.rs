//! User entity representing a registered account in the Rentify marketplace.

use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};

/// Identifier assigned to users by the resource store
pub type UserId = i64;

/// Represents the role of a user in the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Verifies users and properties
    Admin,
    /// Lists properties and handles viewing requests
    Owner,
    /// Browses properties and books viewings
    Tenant,
}

impl Role {
    /// Lowercase wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Owner => "owner",
            Role::Tenant => "tenant",
        }
    }

    /// Landing page after a successful login
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Owner => "/owners",
            Role::Tenant => "/properties",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The identity of a user, as carried by a session.
///
/// Never contains credentials. Only `role` is mandatory when decoding: a
/// session cookie naming just a role is still a session for that role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    #[serde(default)]
    pub id: UserId,

    /// Role of the user
    pub role: Role,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Login email address
    #[serde(default)]
    pub email: String,

    /// Contact phone number
    #[serde(default)]
    pub phone: String,

    /// Whether an administrator has verified the account
    #[serde(default)]
    pub verified: bool,
}

impl User {
    /// Marks the user as verified
    pub fn verify(&mut self) {
        self.verified = true;
    }

    /// Applies a self-service profile edit
    pub fn apply_profile(&mut self, update: &ProfileUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(phone) = &update.phone {
            self.phone = phone.clone();
        }
    }

    /// Checks if the user is an administrator
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Checks if the user is a property owner
    pub fn is_owner(&self) -> bool {
        self.role == Role::Owner
    }

    /// Checks if the user is a tenant
    pub fn is_tenant(&self) -> bool {
        self.role == Role::Tenant
    }
}

/// A user document as held by the resource store, including its password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    #[serde(flatten)]
    pub user: User,

    /// Plain-text password kept by the mock store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl StoredUser {
    pub fn new(user: User, password: impl Into<String>) -> Self {
        Self {
            user,
            password: Some(password.into()),
        }
    }

    /// Checks the login email (case-insensitive) and password
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        let email_matches = self.user.email.eq_ignore_ascii_case(email.trim());
        let password_matches = self
            .password
            .as_deref()
            .map(|stored| constant_time_eq(stored.as_bytes(), password.as_bytes()))
            .unwrap_or(false);
        email_matches && password_matches
    }

    /// Drops the credentials, keeping only the identity
    pub fn into_identity(self) -> User {
        self.user
    }
}

/// Fields a user may change on their own profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}
