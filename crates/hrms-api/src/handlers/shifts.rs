//! Shift scheduling handlers (gated on the `shifts` feature)

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use uuid::Uuid;

use crate::error::{domain_error, ApiResult};
use crate::extract::{actor_from_headers, tenant_from_headers};
use crate::response::ApiResponse;
use crate::state::AppState;
use hrms_core::domain::{NewShift, NewShiftTemplate, Shift, ShiftTemplate, ShiftUpdate};
use hrms_core::services::policy;

/// GET /api/v1/shifts
pub async fn list(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Vec<Shift>> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "shifts").map_err(domain_error)?;

    let store = state.store.read().await;
    Ok(Json(ApiResponse::success(store.shifts().to_vec())))
}

/// POST /api/v1/shifts
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewShift>,
) -> ApiResult<Shift> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "shifts").map_err(domain_error)?;

    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let shift = store.add_shift(&actor, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(shift)))
}

/// PUT /api/v1/shifts/{id}
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<ShiftUpdate>,
) -> ApiResult<Shift> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "shifts").map_err(domain_error)?;

    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let shift = store.update_shift(&actor, id, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(shift)))
}

/// DELETE /api/v1/shifts/{id}
pub async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> ApiResult<()> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "shifts").map_err(domain_error)?;

    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    store.delete_shift(&actor, id).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(())))
}

/// GET /api/v1/shift-templates
pub async fn list_templates(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Vec<ShiftTemplate>> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "shifts").map_err(domain_error)?;

    let store = state.store.read().await;
    Ok(Json(ApiResponse::success(store.shift_templates().to_vec())))
}

/// POST /api/v1/shift-templates
pub async fn create_template(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewShiftTemplate>,
) -> ApiResult<ShiftTemplate> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "shifts").map_err(domain_error)?;

    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let template = store.add_shift_template(&actor, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(template)))
}
