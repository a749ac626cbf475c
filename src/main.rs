mod api_doc;
mod config;
mod credentials;
mod error;
mod firebase;
mod handlers;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use firebase::FirebaseClient;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("rust-firebase-lookup starting");

    let config = Config::from_env()?;
    config.log_startup();

    let firebase_client = FirebaseClient::shared(&config).await?.clone();

    let state = AppState {
        firebase_client,
        config: Arc::new(config.clone()),
    };

    let app = Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::ENTITY_FIELD, get(handlers::lookup_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
