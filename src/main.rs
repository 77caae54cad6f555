mod apidoc;
mod config;
mod handlers;
mod models;
mod routes;
mod services;

use std::sync::Arc;

use axum::{Router, routing::post};
use config::Config;
use services::completion::{CompletionService, OpenAiClient};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub completion: Arc<dyn CompletionService>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/generate-plan", post(routes::plan::generate_plan))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", apidoc::ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::error!("Failed to load configuration: {err}");
            std::process::exit(1);
        }
    };
    // Compute before moving state anywhere
    let addr = format!("{}:{}", cfg.app_host, cfg.app_port);

    let completion = Arc::new(OpenAiClient::new(&cfg, reqwest::Client::new()));
    tracing::info!("Using completion model {}", cfg.openai_model);

    let app = build_router(AppState { cfg, completion });

    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind {addr}: {err}");
            std::process::exit(1);
        }
    };

    tracing::info!("Study plan adapter listening on http://{addr}");
    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("Server error: {err}");
        std::process::exit(1);
    }
}
