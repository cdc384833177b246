//! Server lifecycle
//!
//! Configuration to listening socket: load and validate config,
//! initialize logging, construct providers and services, assemble the
//! Rocket instance, launch.

use crate::admin_key::AdminKeyPolicy;
use crate::handlers;
use crate::state::ServerState;
use porter_application::{CacheAdminService, LoginService};
use porter_domain::clock::{Clock, SystemClock};
use porter_domain::constants::SERVICE_NAME;
use porter_domain::error::{Error, Result};
use porter_domain::ports::auth::AuthenticationBackend;
use porter_infrastructure::config::AppConfig;
use porter_infrastructure::config::loader::load_config;
use porter_infrastructure::factory;
use porter_infrastructure::logging::init_logging;
use porter_providers::auth::NullAuthenticationBackend;
use rocket::{Build, Rocket, routes};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Build server state from configuration and an authentication backend
pub fn build_state(
    config: &AppConfig,
    backend: Arc<dyn AuthenticationBackend>,
) -> Result<ServerState> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let regions = factory::build_region_manager(&config.cache, Arc::clone(&clock))?;
    let guard = factory::build_login_guard(&config.throttle)?;

    let login = Arc::new(LoginService::new(guard, backend, clock));
    let cache_admin = Arc::new(CacheAdminService::new(regions));
    Ok(ServerState::new(login, cache_admin))
}

/// Assemble the Rocket instance over prepared state
pub fn build_rocket(state: ServerState, policy: AdminKeyPolicy) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .manage(Arc::new(policy))
        .mount(
            "/",
            routes![
                handlers::login::login,
                handlers::cache_admin::clear_caches,
                handlers::cache_admin::list_regions,
                handlers::health::health,
            ],
        )
}

/// Run the server until shutdown
///
/// The binary wires the null authentication backend; embedding hosts
/// that need a real one call [`build_state`]/[`build_rocket`] directly.
pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(
        service = SERVICE_NAME,
        host = %config.server.host,
        port = config.server.port,
        cache_provider = ?config.cache.provider,
        throttle_provider = ?config.throttle.provider,
        "starting server"
    );

    let backend: Arc<dyn AuthenticationBackend> = Arc::new(NullAuthenticationBackend::new());
    let state = build_state(&config, backend)?;
    let policy = AdminKeyPolicy::from_config(&config.auth.admin);

    let figment = rocket::Config::figment()
        .merge(("address", config.server.host.clone()))
        .merge(("port", config.server.port));

    build_rocket(state, policy)
        .configure(figment)
        .launch()
        .await
        .map_err(|e| Error::internal(format!("server failed to launch: {e}")))?;

    Ok(())
}
