// ============================================================================
// HRMS API - Error Mapping
// File: crates/hrms-api/src/error.rs
// ============================================================================
//! Maps domain errors onto HTTP status codes and the response envelope.

use axum::http::StatusCode;
use axum::Json;

use crate::response::ApiResponse;
use hrms_core::error::DomainError;

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<()>>)>;

pub fn domain_error(err: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let (status, code) = match &err {
        DomainError::EmployeeNotFound(_)
        | DomainError::DepartmentNotFound(_)
        | DomainError::LeaveRequestNotFound(_)
        | DomainError::AttendanceRecordNotFound(_)
        | DomainError::ReviewNotFound(_)
        | DomainError::WorkflowNotFound(_)
        | DomainError::WorkflowTaskNotFound(_)
        | DomainError::ShiftNotFound(_)
        | DomainError::SurveyNotFound(_)
        | DomainError::TenantNotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),

        DomainError::EmployeeIdAlreadyExists(_)
        | DomainError::DepartmentNameAlreadyExists(_)
        | DomainError::TenantDomainAlreadyExists(_)
        | DomainError::TenantSubdomainAlreadyExists(_)
        | DomainError::AttendanceAlreadyRecorded { .. }
        | DomainError::InvalidStatusTransition { .. }
        | DomainError::SurveyNotActive(_) => (StatusCode::CONFLICT, "CONFLICT"),

        DomainError::UnknownEmployee(_)
        | DomainError::UnknownDepartment(_)
        | DomainError::InvertedDateRange { .. }
        | DomainError::InvertedTimeRange { .. }
        | DomainError::ValidationError(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR")
        }

        DomainError::FeatureDisabled(_) | DomainError::EmployeeLimitReached(_) => {
            (StatusCode::FORBIDDEN, "POLICY_DENIED")
        }

        DomainError::CalendarSyncFailed(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),

        DomainError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    };

    (status, Json(ApiResponse::error(code, &err.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_not_found_maps_to_404() {
        let (status, _) = domain_error(DomainError::EmployeeNotFound(Uuid::new_v4()));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_policy_denials_map_to_403() {
        let (status, body) = domain_error(DomainError::FeatureDisabled("shifts".to_string()));
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.0.error.as_ref().unwrap().code, "POLICY_DENIED");
    }

    #[test]
    fn test_duplicate_key_maps_to_409() {
        let (status, _) =
            domain_error(DomainError::EmployeeIdAlreadyExists("EMP001".to_string()));
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
