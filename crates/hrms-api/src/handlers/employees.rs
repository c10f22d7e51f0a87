// ============================================================================
// HRMS API - Employee Handlers
// File: crates/hrms-api/src/handlers/employees.rs
// ============================================================================

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use uuid::Uuid;

use crate::error::{domain_error, ApiResult};
use crate::extract::{actor_from_headers, tenant_from_headers};
use crate::response::ApiResponse;
use crate::state::AppState;
use hrms_core::domain::{Employee, EmployeeUpdate, NewEmployee};
use hrms_core::services::policy;

/// GET /api/v1/employees
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    let store = state.store.read().await;
    Ok(Json(ApiResponse::success(store.employees().to_vec())))
}

/// GET /api/v1/employees/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Employee> {
    let store = state.store.read().await;
    let employee = store
        .employees()
        .iter()
        .find(|e| e.id == id)
        .cloned()
        .ok_or_else(|| domain_error(hrms_core::error::DomainError::EmployeeNotFound(id)))?;
    Ok(Json(ApiResponse::success(employee)))
}

/// POST /api/v1/employees
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewEmployee>,
) -> ApiResult<Employee> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    let actor = actor_from_headers(&headers);

    let mut store = state.store.write().await;
    policy::ensure_employee_capacity(&tenant, store.active_employee_count())
        .map_err(domain_error)?;
    let employee = store.add_employee(&actor, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(employee)))
}

/// PUT /api/v1/employees/{id}
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<EmployeeUpdate>,
) -> ApiResult<Employee> {
    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let employee = store.update_employee(&actor, id, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(employee)))
}

/// DELETE /api/v1/employees/{id}
pub async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> ApiResult<()> {
    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    store.delete_employee(&actor, id).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(())))
}
