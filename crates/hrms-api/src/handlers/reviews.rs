//! Performance review handlers (gated on the `performance` feature)

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use uuid::Uuid;

use crate::error::{domain_error, ApiResult};
use crate::extract::{actor_from_headers, tenant_from_headers};
use crate::response::ApiResponse;
use crate::state::AppState;
use hrms_core::domain::{NewPerformanceReview, PerformanceReview, ReviewUpdate};
use hrms_core::services::policy;

/// GET /api/v1/reviews
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Vec<PerformanceReview>> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "performance").map_err(domain_error)?;

    let store = state.store.read().await;
    Ok(Json(ApiResponse::success(store.performance_reviews().to_vec())))
}

/// POST /api/v1/reviews
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewPerformanceReview>,
) -> ApiResult<PerformanceReview> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "performance").map_err(domain_error)?;

    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let review = store.add_performance_review(&actor, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(review)))
}

/// PUT /api/v1/reviews/{id}
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReviewUpdate>,
) -> ApiResult<PerformanceReview> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    policy::ensure_feature(&tenant, "performance").map_err(domain_error)?;

    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let review = store.update_performance_review(&actor, id, payload).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(review)))
}
