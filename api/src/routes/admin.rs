//! User administration API

use actix_web::{web, HttpResponse};
use rf_core::repositories::{
    AppointmentRepository, NotificationRepository, PropertyRepository, UserRepository,
};
use rf_core::UserId;
use rf_shared::ApiResponse;

use crate::handlers::ApiError;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Handler for PATCH /api/users/{id}/verify
pub async fn verify_user<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    user: CurrentUser,
    id: web::Path<UserId>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let verified = state
        .admin_service
        .verify_user(&user.0, id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(verified)))
}

/// Handler for DELETE /api/users/{id}
pub async fn delete_user<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    user: CurrentUser,
    id: web::Path<UserId>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    state
        .admin_service
        .delete_user(&user.0, id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("User deleted")))
}
