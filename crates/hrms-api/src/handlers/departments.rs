//! Department handlers

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use uuid::Uuid;

use crate::error::{domain_error, ApiResult};
use crate::extract::actor_from_headers;
use crate::response::ApiResponse;
use crate::state::AppState;
use hrms_core::domain::{Department, DepartmentUpdate, NewDepartment};

/// GET /api/v1/departments
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Department>> {
    let store = state.store.read().await;
    Ok(Json(ApiResponse::success(store.departments().to_vec())))
}

/// POST /api/v1/departments
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewDepartment>,
) -> ApiResult<Department> {
    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let department = store.add_department(&actor, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(department)))
}

/// PUT /api/v1/departments/{id}
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<DepartmentUpdate>,
) -> ApiResult<Department> {
    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let department = store.update_department(&actor, id, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(department)))
}

/// DELETE /api/v1/departments/{id}
pub async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> ApiResult<()> {
    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    store.delete_department(&actor, id).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(())))
}
