use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use property_agent::config::AppConfig;
use property_agent::functions::FunctionRegistry;
use property_agent::handlers;
use property_agent::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let functions = FunctionRegistry::new()?;
    tracing::info!(functions = ?functions.names(), "function table loaded");

    let state = Arc::new(AppState { config, functions });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/book_appointment", post(handlers::booking::book_appointment))
        .route("/functions", get(handlers::functions::list_functions))
        .route("/functions/:name", post(handlers::functions::call_function))
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let addr = state.config.bind_addr();
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
