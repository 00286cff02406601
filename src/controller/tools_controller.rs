use std::sync::Arc;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};
use crate::controller::AppState;
use crate::helpers::progress::RecordingEmitter;
use crate::tools::error::ToolInvokeError;
use crate::tools::registry::ToolRegistry;
use crate::tools::OutputFormat;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/tools", get(list_tools))
        .route("/tools/:name", post(invoke_tool))
        .route_layer(Extension(app_state.registry))
}

pub async fn list_tools(
    Extension(registry): Extension<Arc<ToolRegistry>>,
) -> impl IntoResponse {
    Json(registry.get_definitions())
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct InvokeToolBody {
    #[serde(default = "empty_arguments")]
    pub arguments: Value,
    #[serde(default)]
    pub format: OutputFormat,
}

fn empty_arguments() -> Value {
    json!({})
}

pub async fn invoke_tool(
    Extension(registry): Extension<Arc<ToolRegistry>>,
    Path(name): Path<String>,
    Json(body): Json<InvokeToolBody>,
) -> impl IntoResponse {
    info!("Invoking tool {} ({:?} output)", name, body.format);
    let emitter = RecordingEmitter::default();
    let invoke_res = registry
        .execute(&name, body.arguments, body.format, &emitter)
        .await;

    return match invoke_res {
        Ok(output) => {
            (
                StatusCode::OK,
                Json(json!({ "output": output, "events": emitter.events() })),
            ).into_response()
        }
        Err(e @ ToolInvokeError::NotFound { .. }) => {
            warn!("Rejected call to unknown tool: {}", e);
            (StatusCode::NOT_FOUND, Json(json!({ "error": e.to_string() }))).into_response()
        }
        Err(e) => {
            warn!("Rejected tool call due to: {}", e);
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
        }
    };
}
