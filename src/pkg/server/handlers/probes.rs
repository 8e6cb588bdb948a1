use axum::{extract::State, Json};
use serde_json::{json, Value};
use sqlx::query;

use crate::{pkg::server::state::AppState, prelude::Result};

pub async fn livez() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn healthz(State(state): State<AppState>) -> Result<Json<Value>> {
    query("select 1").execute(&*state.db_pool).await?;
    Ok(Json(json!({ "status": "ok" })))
}
