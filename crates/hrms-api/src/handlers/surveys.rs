//! Survey handlers (gated on the `surveys` feature)

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use uuid::Uuid;

use crate::error::{domain_error, ApiResult};
use crate::extract::{actor_from_headers, tenant_from_headers};
use crate::response::ApiResponse;
use crate::state::AppState;
use hrms_core::domain::{NewSurvey, NewSurveyResponse, Survey, SurveyResponse, SurveyUpdate};
use hrms_core::services::policy;

/// GET /api/v1/surveys
pub async fn list(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Vec<Survey>> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "surveys").map_err(domain_error)?;

    let store = state.store.read().await;
    Ok(Json(ApiResponse::success(store.surveys().to_vec())))
}

/// POST /api/v1/surveys
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewSurvey>,
) -> ApiResult<Survey> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "surveys").map_err(domain_error)?;

    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let survey = store.add_survey(&actor, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(survey)))
}

/// PUT /api/v1/surveys/{id}
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<SurveyUpdate>,
) -> ApiResult<Survey> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "surveys").map_err(domain_error)?;

    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let survey = store.update_survey(&actor, id, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(survey)))
}

/// POST /api/v1/surveys/{id}/responses
pub async fn submit_response(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<NewSurveyResponse>,
) -> ApiResult<SurveyResponse> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "surveys").map_err(domain_error)?;

    let mut store = state.store.write().await;
    let response = store.submit_survey_response(id, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(response)))
}
