//! Dashboard statistics handler

use axum::extract::State;
use axum::Json;

use crate::error::ApiResult;
use crate::response::ApiResponse;
use crate::state::AppState;
use hrms_core::domain::DashboardStats;

/// GET /api/v1/dashboard/stats
///
/// Statistics are recomputed from the live collections on every call.
pub async fn stats(State(state): State<AppState>) -> ApiResult<DashboardStats> {
    let store = state.store.read().await;
    Ok(Json(ApiResponse::success(store.dashboard_stats())))
}
