//! Authentication and profile request/response types.

use rf_core::services::DemoAccount;
use rf_core::{ProfileUpdate, User};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/auth/login`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response body for a successful login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: User,
    /// Landing page for the user's role
    pub redirect_to: &'static str,
}

impl LoginResponse {
    pub fn new(user: User) -> Self {
        let redirect_to = user.role.home_path();
        Self { user, redirect_to }
    }
}

/// Response body for `GET /api/auth/session`
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub user: Option<User>,
}

/// Request body for `PATCH /api/profile`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: Option<String>,

    #[validate(length(min = 7, max = 20, message = "Phone must be 7-20 characters"))]
    pub phone: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            name: request.name.map(|n| n.trim().to_string()),
            email: request.email.map(|e| e.trim().to_string()),
            phone: request.phone.map(|p| p.trim().to_string()),
        }
    }
}

/// Model of the login page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPage {
    pub demo_accounts: Vec<DemoAccount>,
}
