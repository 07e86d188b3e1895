use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;
use std::sync::Arc;

use rf_api::{create_app, AppState};
use rf_core::repositories::{
    AppointmentRepository, NotificationRepository, PropertyRepository, UserRepository,
};
use rf_infra::{
    DemoStore, RestAppointmentRepository, RestNotificationRepository, RestPropertyRepository,
    RestUserRepository, StoreClient,
};
use rf_shared::{AppConfig, StoreBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!("Starting Rentify API Server ({})", config.environment);

    match config.store.backend {
        StoreBackend::Rest => {
            let client = StoreClient::new(&config.store).context("Failed to create store client")?;
            info!("Using REST resource store at {}", client.base_url());

            let state = AppState::new(
                Arc::new(RestUserRepository::new(client.clone())),
                Arc::new(RestPropertyRepository::new(client.clone())),
                Arc::new(RestAppointmentRepository::new(client.clone())),
                Arc::new(RestNotificationRepository::new(client)),
                &config.session,
            );
            serve(state, config).await
        }
        StoreBackend::Memory => {
            info!("Using in-memory store with demo data");
            let store = DemoStore::seeded();

            let state = AppState::new(
                store.users,
                store.properties,
                store.appointments,
                store.notifications,
                &config.session,
            );
            serve(state, config).await
        }
    }
}

/// Runs the HTTP server until shutdown
async fn serve<U, P, A, N>(state: AppState<U, P, A, N>, config: AppConfig) -> anyhow::Result<()>
where
    U: UserRepository + 'static,
    P: PropertyRepository + 'static,
    A: AppointmentRepository + 'static,
    N: NotificationRepository + 'static,
{
    if state.sessions.is_signed() {
        info!("Session cookies are signed");
    } else {
        log::warn!("SESSION_SECRET is not set; session cookies are unsigned JSON");
    }

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let app_state = web::Data::new(state);
    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config))
        .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server terminated with an error")
}
