//! Tenant handlers: resolution, branding, settings, feature set

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::error::{domain_error, ApiResult};
use crate::extract::tenant_from_headers;
use crate::response::ApiResponse;
use crate::state::AppState;
use hrms_core::domain::{NewTenant, Tenant, TenantUpdate};

/// GET /api/v1/tenant
///
/// Returns the tenant resolved from the request's host, falling back
/// to the configured default tenant.
pub async fn current(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Tenant> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    Ok(Json(ApiResponse::success(tenant)))
}

/// GET /api/v1/tenant/features
pub async fn current_features(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<BTreeSet<String>> {
    let tenant = tenant_from_headers(&state, &headers).await?;
    Ok(Json(ApiResponse::success(tenant.feature_set())))
}

#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    pub host: String,
}

/// GET /api/v1/tenant/resolve?host=
///
/// Strict resolution: unknown hosts are a 404, no default fallback.
pub async fn resolve(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
) -> ApiResult<Tenant> {
    let tenant = state.tenants.resolve(&params.host).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(tenant)))
}

/// GET /api/v1/tenants/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Tenant> {
    let tenant = state.tenants.get_by_id(&id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(tenant)))
}

/// GET /api/v1/tenants/{id}/features
pub async fn features(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<BTreeSet<String>> {
    let features = state.tenants.feature_set(&id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(features)))
}

/// POST /api/v1/tenants
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewTenant>,
) -> ApiResult<Tenant> {
    let tenant = state.tenants.create(payload).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(tenant)))
}

/// PUT /api/v1/tenants/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TenantUpdate>,
) -> ApiResult<Tenant> {
    let tenant = state.tenants.update(&id, payload).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(tenant)))
}
