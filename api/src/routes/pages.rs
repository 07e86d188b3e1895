//! Page model handlers
//!
//! Each page of the marketplace is served as the JSON model it renders.
//! The route gate has already admitted the navigation; handlers that need an
//! identity still extract it, so a role-only session reaches the service
//! layer's own role checks.

use actix_web::{web, HttpResponse};
use rf_core::repositories::{
    AppointmentRepository, NotificationRepository, PropertyRepository, UserRepository,
};
use rf_core::errors::AuthError;
use rf_core::services::demo_accounts;
use rf_core::{PropertyFilter, PropertyId};
use rf_shared::ApiResponse;

use crate::dto::{ListingFormPage, ListingFormQuery, LoginPage};
use crate::handlers::ApiError;
use crate::middleware::{CurrentUser, OptionalUser};
use crate::state::AppState;

/// GET / - featured and recent listings
pub async fn home<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let listing = state.property_service.home().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(listing)))
}

/// GET /properties - filtered listing
///
/// Query: `city`, `type`, `minPrice`, `maxPrice`, `availability`,
/// `verified`. Empty and catch-all values do not filter.
pub async fn properties<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    filter: web::Query<PropertyFilter>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let properties = state.property_service.browse(&filter).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(properties)))
}

/// GET /properties/{id} - listing details with owner contact and booking options
pub async fn property_details<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    id: web::Path<PropertyId>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let details = state.property_service.details(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(details)))
}

/// GET /appointments - the session user's viewing requests
pub async fn appointments<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    user: CurrentUser,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let appointments = state.appointment_service.list_for_user(&user.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(appointments)))
}

/// GET /owners - owner dashboard
pub async fn owner_dashboard<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    user: CurrentUser,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let dashboard = state.appointment_service.owner_dashboard(&user.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(dashboard)))
}

/// GET /admin - admin dashboard
pub async fn admin_dashboard<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    user: CurrentUser,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let dashboard = state.admin_service.dashboard(&user.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(dashboard)))
}

/// GET /admin/users - every user, without credentials
pub async fn admin_users<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    user: CurrentUser,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let users = state.admin_service.list_users(&user.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(users)))
}

/// GET /profile - the session identity, or null
pub async fn profile(user: OptionalUser) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(user.0))
}

/// GET /login - demo account hints
pub async fn login_page() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(LoginPage {
        demo_accounts: demo_accounts(),
    }))
}

/// GET /register - listing form options, prefilled with `?edit={id}`.
///
/// Editing needs an owner session for the listing; without `edit` the form
/// is public.
pub async fn listing_form<U, P, A, N>(
    state: web::Data<AppState<U, P, A, N>>,
    user: OptionalUser,
    query: web::Query<ListingFormQuery>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let property = match query.edit {
        Some(id) => {
            let owner = user.0.ok_or(AuthError::SessionRequired)?;
            Some(state.property_service.editable(&owner, id).await?)
        }
        None => None,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(ListingFormPage::new(property))))
}
