//! Onboarding and offboarding workflow handlers (gated on `onboarding`)

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{domain_error, ApiResult};
use crate::extract::{actor_from_headers, tenant_from_headers};
use crate::response::ApiResponse;
use crate::state::AppState;
use hrms_core::domain::{
    NewOffboardingWorkflow, NewOnboardingWorkflow, OffboardingWorkflow, OnboardingWorkflow,
    TaskStatus, WorkflowUpdate,
};
use hrms_core::services::policy;

#[derive(Debug, Deserialize)]
pub struct TaskStatusRequest {
    pub status: TaskStatus,
}

/// GET /api/v1/onboarding
pub async fn list_onboarding(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Vec<OnboardingWorkflow>> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "onboarding").map_err(domain_error)?;

    let store = state.store.read().await;
    Ok(Json(ApiResponse::success(store.onboarding_workflows().to_vec())))
}

/// POST /api/v1/onboarding
pub async fn create_onboarding(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewOnboardingWorkflow>,
) -> ApiResult<OnboardingWorkflow> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "onboarding").map_err(domain_error)?;

    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let workflow = store.add_onboarding_workflow(&actor, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(workflow)))
}

/// PUT /api/v1/onboarding/{id}
pub async fn update_onboarding(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<WorkflowUpdate>,
) -> ApiResult<OnboardingWorkflow> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "onboarding").map_err(domain_error)?;

    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let workflow = store.update_onboarding_workflow(&actor, id, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(workflow)))
}

/// PUT /api/v1/onboarding/{id}/tasks/{task_id}
pub async fn set_onboarding_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, task_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<TaskStatusRequest>,
) -> ApiResult<OnboardingWorkflow> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "onboarding").map_err(domain_error)?;

    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let workflow = store
        .set_onboarding_task_status(&actor, id, task_id, payload.status)
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(workflow)))
}

/// GET /api/v1/offboarding
pub async fn list_offboarding(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Vec<OffboardingWorkflow>> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "onboarding").map_err(domain_error)?;

    let store = state.store.read().await;
    Ok(Json(ApiResponse::success(store.offboarding_workflows().to_vec())))
}

/// POST /api/v1/offboarding
pub async fn create_offboarding(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewOffboardingWorkflow>,
) -> ApiResult<OffboardingWorkflow> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "onboarding").map_err(domain_error)?;

    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let workflow = store.add_offboarding_workflow(&actor, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(workflow)))
}

/// PUT /api/v1/offboarding/{id}
pub async fn update_offboarding(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<WorkflowUpdate>,
) -> ApiResult<OffboardingWorkflow> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "onboarding").map_err(domain_error)?;

    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let workflow = store.update_offboarding_workflow(&actor, id, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(workflow)))
}

/// PUT /api/v1/offboarding/{id}/tasks/{task_id}
pub async fn set_offboarding_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, task_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<TaskStatusRequest>,
) -> ApiResult<OffboardingWorkflow> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "onboarding").map_err(domain_error)?;

    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let workflow = store
        .set_offboarding_task_status(&actor, id, task_id, payload.status)
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(workflow)))
}
