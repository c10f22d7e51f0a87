//! Request context helpers
//!
//! Identity arrives via gateway-injected headers; there is no session
//! layer here. Absent headers fall back to the system actor.

use axum::http::{header::HOST, HeaderMap, StatusCode};
use axum::Json;

use crate::error::domain_error;
use crate::response::ApiResponse;
use crate::state::AppState;
use hrms_core::domain::Tenant;
use hrms_shared::Actor;

const USER_ID_HEADER: &str = "x-user-id";
const USER_NAME_HEADER: &str = "x-user-name";
const TENANT_HOST_HEADER: &str = "x-tenant-host";

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok()).filter(|s| !s.is_empty())
}

pub fn actor_from_headers(headers: &HeaderMap) -> Actor {
    match (header_str(headers, USER_ID_HEADER), header_str(headers, USER_NAME_HEADER)) {
        (Some(id), Some(name)) => Actor::new(id, name),
        (Some(id), None) => Actor::new(id, id),
        _ => Actor::system(),
    }
}

/// Resolves the request's tenant from `x-tenant-host` (set by the
/// gateway) or the `Host` header, falling back to the default tenant.
pub async fn tenant_from_headers(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Tenant, (StatusCode, Json<ApiResponse<()>>)> {
    let host = header_str(headers, TENANT_HOST_HEADER)
        .or_else(|| headers.get(HOST).and_then(|v| v.to_str().ok()))
        .unwrap_or_default();

    // strip any port before matching
    let host = host.split(':').next().unwrap_or(host);
    state.tenants.resolve_or_default(host).await.map_err(domain_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_missing_headers_yield_system_actor() {
        let actor = actor_from_headers(&HeaderMap::new());
        assert_eq!(actor.user_id, Actor::system().user_id);
    }

    #[test]
    fn test_headers_yield_named_actor() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("u-42"));
        headers.insert(USER_NAME_HEADER, HeaderValue::from_static("Sarah HR"));
        let actor = actor_from_headers(&headers);
        assert_eq!(actor.user_id, "u-42");
        assert_eq!(actor.user_name, "Sarah HR");
    }
}
