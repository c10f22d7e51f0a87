//! Leave request handlers

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use uuid::Uuid;

use crate::error::{domain_error, ApiResult};
use crate::extract::actor_from_headers;
use crate::response::ApiResponse;
use crate::state::AppState;
use hrms_core::domain::{LeaveRequest, LeaveRequestUpdate, NewLeaveRequest};

/// GET /api/v1/leave-requests
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<LeaveRequest>> {
    let store = state.store.read().await;
    Ok(Json(ApiResponse::success(store.leave_requests().to_vec())))
}

/// POST /api/v1/leave-requests
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewLeaveRequest>,
) -> ApiResult<LeaveRequest> {
    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let request = store.add_leave_request(&actor, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(request)))
}

/// PUT /api/v1/leave-requests/{id}
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<LeaveRequestUpdate>,
) -> ApiResult<LeaveRequest> {
    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let request = store.update_leave_request(&actor, id, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(request)))
}
