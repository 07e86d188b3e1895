//! Application factory
//!
//! Builds the actix-web application: middleware, page routes, API routes
//! and the health check.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{Condition, Logger},
    web, App, Error, HttpResponse,
};
use rf_core::repositories::{
    AppointmentRepository, NotificationRepository, PropertyRepository, UserRepository,
};
use rf_shared::{error_codes, AppConfig, ErrorResponse, HealthResponse};

use crate::middleware::{create_cors, RouteGate};
use crate::routes::{admin, appointments, auth, pages, profile, properties};
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<U, P, A, N>(
    app_state: web::Data<AppState<U, P, A, N>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let gate = RouteGate::new(app_state.sessions.clone(), app_state.policy);

    App::new()
        // Add application state
        .app_data(app_state)
        // The last middleware registered sees the request first
        .wrap(gate)
        .wrap(create_cors(&config.cors))
        .wrap(Condition::new(config.logging.access_log, Logger::default()))
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Pages
        .route("/", web::get().to(pages::home::<U, P, A, N>))
        .route("/properties", web::get().to(pages::properties::<U, P, A, N>))
        .route("/properties/{id}", web::get().to(pages::property_details::<U, P, A, N>))
        .route("/appointments", web::get().to(pages::appointments::<U, P, A, N>))
        .route("/owners", web::get().to(pages::owner_dashboard::<U, P, A, N>))
        .route("/admin", web::get().to(pages::admin_dashboard::<U, P, A, N>))
        .route("/admin/users", web::get().to(pages::admin_users::<U, P, A, N>))
        .route("/profile", web::get().to(pages::profile))
        .route("/login", web::get().to(pages::login_page))
        .route("/register", web::get().to(pages::listing_form::<U, P, A, N>))
        // API routes
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(auth::login::<U, P, A, N>))
                        .route("/logout", web::post().to(auth::logout))
                        .route("/session", web::get().to(auth::current_session)),
                )
                .route("/profile", web::patch().to(profile::update_profile::<U, P, A, N>))
                .service(
                    web::scope("/properties")
                        .route("", web::get().to(properties::list_properties::<U, P, A, N>))
                        .route("", web::post().to(properties::create_property::<U, P, A, N>))
                        .route("/{id}", web::put().to(properties::update_property::<U, P, A, N>))
                        .route("/{id}", web::delete().to(properties::delete_property::<U, P, A, N>))
                        .route(
                            "/{id}/verify",
                            web::patch().to(properties::verify_property::<U, P, A, N>),
                        ),
                )
                .service(
                    web::scope("/appointments")
                        .route("", web::post().to(appointments::create_appointment::<U, P, A, N>))
                        .route(
                            "/{id}/status",
                            web::patch().to(appointments::update_appointment_status::<U, P, A, N>),
                        ),
                )
                .service(
                    web::scope("/users")
                        .route("/{id}/verify", web::patch().to(admin::verify_user::<U, P, A, N>))
                        .route("/{id}", web::delete().to(admin::delete_user::<U, P, A, N>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy("rentify-api", env!("CARGO_PKG_VERSION")))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
