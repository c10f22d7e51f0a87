//! Attendance handlers

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use uuid::Uuid;

use crate::error::{domain_error, ApiResult};
use crate::extract::actor_from_headers;
use crate::response::ApiResponse;
use crate::state::AppState;
use hrms_core::domain::{AttendanceRecord, AttendanceUpdate, NewAttendanceRecord};

/// GET /api/v1/attendance
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<AttendanceRecord>> {
    let store = state.store.read().await;
    Ok(Json(ApiResponse::success(store.attendance_records().to_vec())))
}

/// POST /api/v1/attendance
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewAttendanceRecord>,
) -> ApiResult<AttendanceRecord> {
    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let record = store.add_attendance_record(&actor, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(record)))
}

/// PUT /api/v1/attendance/{id}
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<AttendanceUpdate>,
) -> ApiResult<AttendanceRecord> {
    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let record = store.update_attendance_record(&actor, id, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(record)))
}
