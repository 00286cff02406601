use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::{json, Value};
use crate::controller::AppState;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(get_health_check))
        .route_layer(Extension(app_state))
}

/// Liveness only, the maps backend itself is not probed.
async fn get_health_check(
    Extension(app_state): Extension<AppState>,
) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "backendUrl": app_state.backend_url,
        "tools": app_state.registry.names(),
    }))
}
