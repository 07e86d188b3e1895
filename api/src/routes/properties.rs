//! Property listing API
//!
//! Anyone may query listings. Creating, editing and deleting require the
//! owner role, and edits are limited to the owner's own listings.
//! Verification is an administrator action.

use actix_web::{web, HttpResponse};
use rf_core::repositories::{
    AppointmentRepository, NotificationRepository, PropertyRepository, UserRepository,
};
use rf_core::PropertyId;
use rf_shared::ApiResponse;
use validator::Validate;

use crate::dto::PropertyRequest;
use crate::handlers::ApiError;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Handler for GET /api/properties
///
/// Query parameters are passed through as equality filters on the listing
/// fields, e.g. `?ownerId=4` or `?city=Chicago&verified=true`.
pub async fn list_properties<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let properties = state.property_service.search(&query).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(properties)))
}

/// Handler for POST /api/properties
///
/// # Request Body
///
/// ```json
/// {
///     "title": "Garden Flat",
///     "description": "Quiet street, close to the park",
///     "city": "Chicago",
///     "type": "Apartment",
///     "price": 1800,
///     "images": [],
///     "availability": "Available"
/// }
/// ```
///
/// Responds 201 Created with the stored listing. The listing belongs to the
/// signed-in owner, starts unverified and unhighlighted, and gets a
/// placeholder image when none is given.
pub async fn create_property<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    user: CurrentUser,
    request: web::Json<PropertyRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let property = state
        .property_service
        .create_listing(&user.0, request.into())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(property)))
}

/// Handler for PUT /api/properties/{id}
pub async fn update_property<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    user: CurrentUser,
    id: web::Path<PropertyId>,
    request: web::Json<PropertyRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let property = state
        .property_service
        .update_listing(&user.0, id.into_inner(), request.into())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(property)))
}

/// Handler for DELETE /api/properties/{id}
pub async fn delete_property<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    user: CurrentUser,
    id: web::Path<PropertyId>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    state
        .property_service
        .delete_listing(&user.0, id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Property deleted")))
}

/// Handler for PATCH /api/properties/{id}/verify
pub async fn verify_property<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    user: CurrentUser,
    id: web::Path<PropertyId>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let property = state
        .admin_service
        .verify_property(&user.0, id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(property)))
}
