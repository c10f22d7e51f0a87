//! Audit trail handlers (read-only)

use axum::extract::{Query, State};
use axum::Json;

use crate::error::ApiResult;
use crate::response::ApiResponse;
use crate::state::AppState;
use hrms_core::domain::{AuditFilter, AuditLog};

/// GET /api/v1/audit-logs?search=&action=&resource=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<AuditFilter>,
) -> ApiResult<Vec<AuditLog>> {
    let store = state.store.read().await;
    Ok(Json(ApiResponse::success(store.query_audit_logs(&filter))))
}
