//! Data export handlers

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::domain_error;
use crate::extract::actor_from_headers;
use crate::response::ApiResponse;
use crate::state::AppState;
use hrms_infrastructure::{ExportFormat, ExportKind};

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    #[serde(default = "default_format")]
    pub format: ExportFormat,
}

fn default_format() -> ExportFormat {
    ExportFormat::Csv
}

/// GET /api/v1/exports/{kind}?format=csv|pdf
///
/// Streams the rendered document back as an attachment. Each call
/// leaves exactly one EXPORT entry in the audit trail.
pub async fn export(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(kind): Path<ExportKind>,
    Query(params): Query<ExportParams>,
) -> Result<impl IntoResponse, (StatusCode, Json<ApiResponse<()>>)> {
    let actor = actor_from_headers(&headers);
    let mut store = state.store.write().await;
    let doc = store.export_data(&actor, kind, params.format).map_err(domain_error)?;

    Ok((
        [
            (header::CONTENT_TYPE, doc.content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", doc.filename),
            ),
        ],
        doc.content,
    ))
}
