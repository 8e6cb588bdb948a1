use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::routing::{delete, get, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::candidates;
use super::handlers::probes::{healthz, livez};
use super::state::AppState;
use crate::prelude::Result;

// multipart bodies carry form fields on top of the 10 MiB resume ceiling
const MAX_BODY_BYTES: usize = 12 * 1024 * 1024;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);
    let app = Router::new()
        .route(
            "/api/candidates",
            get(candidates::list).post(candidates::create),
        )
        .route("/api/candidates/:id/status", put(candidates::update_status))
        .route("/api/candidates/:id", delete(candidates::remove))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(app)
}
