use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version, the active store backend and intake status.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resumify",
        "store": state.store.backend(),
        "extractor": state.extractor.name(),
        "intakeBusy": state.intake.is_busy(),
    }))
}
