//! Authentication route handlers
//!
//! Login, logout and session lookup. The session itself lives in the
//! `auth-user` cookie; these handlers only ever write it through the
//! request's [`SessionStore`](rf_core::SessionStore).

use actix_web::{web, HttpResponse};
use rf_core::repositories::{
    AppointmentRepository, NotificationRepository, PropertyRepository, UserRepository,
};
use rf_shared::ApiResponse;
use validator::Validate;

use crate::dto::{LoginRequest, LoginResponse, SessionResponse};
use crate::handlers::ApiError;
use crate::middleware::{to_cookie, OptionalUser, Session};
use crate::state::AppState;

/// Handler for POST /api/auth/login
///
/// Checks the credentials against the demo accounts and the store's users
/// and starts a session.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "owner4@rentify.com",
///     "password": "owner123"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// Sets the `auth-user` cookie.
/// ```json
/// {
///     "success": true,
///     "data": {
///         "user": { "id": 4, "role": "owner", "name": "Owner Diana", ... },
///         "redirectTo": "/owners"
///     },
///     "timestamp": "2025-07-20T10:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed email or empty password
/// - 401 Unauthorized: "Invalid email or password"
/// - 502 Bad Gateway: the resource store could not be reached
pub async fn login<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    session: Session,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let user = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    let Session(mut store) = session;
    let cookie = store.login(user.clone())?;
    log::info!("User {} signed in as {}", user.id, user.role);

    Ok(HttpResponse::Ok()
        .cookie(to_cookie(&cookie))
        .json(ApiResponse::success(LoginResponse::new(user))))
}

/// Handler for POST /api/auth/logout
///
/// Always succeeds, signed in or not, and expires the session cookie.
pub async fn logout(session: Session) -> HttpResponse {
    let Session(mut store) = session;
    if let Some(user) = store.current() {
        log::info!("User {} signed out", user.id);
    }
    let cookie = store.logout();

    HttpResponse::Ok()
        .cookie(to_cookie(&cookie))
        .json(ApiResponse::message("Signed out"))
}

/// Handler for GET /api/auth/session
///
/// Returns the current identity, or `null` without a usable session.
pub async fn current_session(user: OptionalUser) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(SessionResponse { user: user.0 }))
}
