use axum::{extract::State, Json};
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::server::AppState;

const DASHBOARD_ERROR: &str = "Error fetching dashboard data";

/// GET /api/dashboard
pub async fn get_dashboard(State(state): State<AppState>) -> Result<Json<Value>> {
    let snapshot = state.store.read().await.dashboard();

    let body = serde_json::to_value(&snapshot).map_err(|e| ApiError::Upstream {
        public: DASHBOARD_ERROR,
        detail: e.to_string(),
    })?;

    Ok(Json(body))
}
