use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with the service version and which
/// generation path requests will take.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let generation = if state.config.anthropic_api_key.is_some() {
        "model"
    } else {
        "template"
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "folio-api",
        "generation": generation
    }))
}
