//! Domain errors

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DomainError {
    // --- Not found ---
    #[error("Employee not found: {0}")]
    EmployeeNotFound(Uuid),

    #[error("Department not found: {0}")]
    DepartmentNotFound(Uuid),

    #[error("Leave request not found: {0}")]
    LeaveRequestNotFound(Uuid),

    #[error("Attendance record not found: {0}")]
    AttendanceRecordNotFound(Uuid),

    #[error("Performance review not found: {0}")]
    ReviewNotFound(Uuid),

    #[error("Workflow not found: {0}")]
    WorkflowNotFound(Uuid),

    #[error("Workflow task not found: {0}")]
    WorkflowTaskNotFound(Uuid),

    #[error("Shift not found: {0}")]
    ShiftNotFound(Uuid),

    #[error("Survey not found: {0}")]
    SurveyNotFound(Uuid),

    #[error("Tenant not found")]
    TenantNotFound,

    // --- Broken references ---
    #[error("Unknown employee reference: {0}")]
    UnknownEmployee(Uuid),

    #[error("Unknown department: {0}")]
    UnknownDepartment(String),

    // --- Duplicate unique keys ---
    #[error("Employee id already exists: {0}")]
    EmployeeIdAlreadyExists(String),

    #[error("Department name already exists: {0}")]
    DepartmentNameAlreadyExists(String),

    #[error("Tenant domain already exists: {0}")]
    TenantDomainAlreadyExists(String),

    #[error("Tenant subdomain already exists: {0}")]
    TenantSubdomainAlreadyExists(String),

    #[error("Attendance already recorded for employee {employee_id} on {date}")]
    AttendanceAlreadyRecorded { employee_id: Uuid, date: NaiveDate },

    // --- Invariant violations ---
    #[error("Date range is inverted: {start} > {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Time range is inverted: {start} >= {end}")]
    InvertedTimeRange { start: String, end: String },

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Survey is not accepting responses (status: {0})")]
    SurveyNotActive(String),

    // --- Policy ---
    #[error("Feature not enabled for tenant: {0}")]
    FeatureDisabled(String),

    #[error("Subscription employee limit reached ({0})")]
    EmployeeLimitReached(i32),

    // --- Catch-alls ---
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Calendar sync failed: {0}")]
    CalendarSyncFailed(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(e: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(e.to_string())
    }
}
