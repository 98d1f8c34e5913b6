use anyhow::Context;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

mod auth;
mod configuration;
mod error;
mod routes;
mod state;

use configuration::Settings;
use state::{AppState, AuthConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = Settings::new().context("failed to load configuration")?;
    let addr = settings.server.socket_addr();

    if settings.auth.password.is_none() {
        tracing::warn!("RELAY_AUTH__PASSWORD is not set; logins will be refused");
    }

    let state = AppState {
        auth: AuthConfig {
            password: settings.auth.password.clone(),
            secure_cookies: settings.environment.is_production(),
        },
        backend: settings.backend.into_config(),
    };

    // The chat UI is served separately during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::configure(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
