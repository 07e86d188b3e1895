//! Self-service profile edits

use actix_web::{web, HttpResponse};
use rf_core::repositories::{
    AppointmentRepository, NotificationRepository, PropertyRepository, UserRepository,
};
use rf_shared::ApiResponse;
use validator::Validate;

use crate::dto::UpdateProfileRequest;
use crate::handlers::ApiError;
use crate::middleware::{to_cookie, CurrentUser, Session};
use crate::state::AppState;

/// Handler for PATCH /api/profile
///
/// Updates name, email and/or phone of the signed-in user and re-issues the
/// session cookie so it carries the new identity.
///
/// ## Errors
/// - 400 Bad Request: no field given, or a field fails validation
/// - 401 Unauthorized: no session
/// - 404 Not Found: the user no longer exists in the store
pub async fn update_profile<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    session: Session,
    user: CurrentUser,
    request: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let updated = state
        .auth_service
        .update_profile(&user.0, request.into())
        .await?;

    let Session(mut store) = session;
    let cookie = store.login(updated.clone())?;

    Ok(HttpResponse::Ok()
        .cookie(to_cookie(&cookie))
        .json(ApiResponse::success(updated).with_message("Profile updated")))
}
