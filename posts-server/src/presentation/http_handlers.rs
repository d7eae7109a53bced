use axum::{Json, Router, routing::get};
use serde::Serialize;
use tower_http::services::ServeDir;

use super::{AppState, routes};

pub(crate) fn routes(state: AppState, assets_dir: &str) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .merge(routes::router())
        .nest_service("/assets", ServeDir::new(assets_dir))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthzResponse> {
    Json(HealthzResponse { status: "ok" })
}
