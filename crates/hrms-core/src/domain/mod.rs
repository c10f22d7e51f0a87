//! # HRMS Core - Domain Module
//!
//! Domain entities for the HRMS backend. All entities are tenant-scoped;
//! the store holds one tenant's collections at a time.

pub mod attendance;
pub mod audit;
pub mod calendar;
pub mod department;
pub mod employee;
pub mod leave;
pub mod review;
pub mod shift;
pub mod stats;
pub mod survey;
pub mod tenant;
pub mod workflow;

// Re-export all entities and enums
pub use attendance::{AttendanceRecord, AttendanceStatus, AttendanceUpdate, NewAttendanceRecord};
pub use audit::{AuditAction, AuditFilter, AuditLog};
pub use calendar::{
    CalendarEvent, CalendarEventKind, CalendarEventStatus, CalendarIntegration, SyncSettings,
};
pub use department::{Department, DepartmentUpdate, NewDepartment};
pub use employee::{Employee, EmployeeStatus, EmployeeUpdate, NewEmployee};
pub use leave::{LeaveRequest, LeaveRequestUpdate, LeaveStatus, LeaveType, NewLeaveRequest};
pub use review::{
    Competency, Goal, GoalStatus, NewPerformanceReview, PerformanceReview, ReviewStatus,
    ReviewUpdate,
};
pub use shift::{NewShift, NewShiftTemplate, Shift, ShiftStatus, ShiftTemplate, ShiftUpdate};
pub use stats::DashboardStats;
pub use survey::{
    NewSurvey, NewSurveyResponse, Survey, SurveyQuestion, SurveyQuestionKind, SurveyResponse,
    SurveyStatus, SurveyUpdate, TargetAudience,
};
pub use tenant::{
    ApprovalWorkflow, FeatureFlags, NewTenant, SubscriptionPlan, Tenant, TenantSettings,
    TenantSubscription, TenantUpdate, WorkingHours,
};
pub use workflow::{
    NewOffboardingWorkflow, NewOnboardingWorkflow, OffboardingReason, OffboardingWorkflow,
    OnboardingWorkflow, TaskCategory, TaskStatus, WorkflowStatus, WorkflowTask, WorkflowUpdate,
};
