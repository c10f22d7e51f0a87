// ============================================================================
// HRMS API - Router
// File: crates/hrms-api/src/routes.rs
// ============================================================================
//! Route table for the whole API surface.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        // Employees
        .route(
            "/api/v1/employees",
            get(handlers::employees::list).post(handlers::employees::create),
        )
        .route(
            "/api/v1/employees/{id}",
            get(handlers::employees::get)
                .put(handlers::employees::update)
                .delete(handlers::employees::delete),
        )
        // Departments
        .route(
            "/api/v1/departments",
            get(handlers::departments::list).post(handlers::departments::create),
        )
        .route(
            "/api/v1/departments/{id}",
            put(handlers::departments::update).delete(handlers::departments::delete),
        )
        // Leave requests
        .route("/api/v1/leave-requests", get(handlers::leave::list).post(handlers::leave::create))
        .route("/api/v1/leave-requests/{id}", put(handlers::leave::update))
        // Attendance
        .route(
            "/api/v1/attendance",
            get(handlers::attendance::list).post(handlers::attendance::create),
        )
        .route("/api/v1/attendance/{id}", put(handlers::attendance::update))
        // Performance reviews
        .route("/api/v1/reviews", get(handlers::reviews::list).post(handlers::reviews::create))
        .route("/api/v1/reviews/{id}", put(handlers::reviews::update))
        // Onboarding
        .route(
            "/api/v1/onboarding",
            get(handlers::workflows::list_onboarding).post(handlers::workflows::create_onboarding),
        )
        .route("/api/v1/onboarding/{id}", put(handlers::workflows::update_onboarding))
        .route(
            "/api/v1/onboarding/{id}/tasks/{task_id}",
            put(handlers::workflows::set_onboarding_task),
        )
        // Offboarding
        .route(
            "/api/v1/offboarding",
            get(handlers::workflows::list_offboarding)
                .post(handlers::workflows::create_offboarding),
        )
        .route("/api/v1/offboarding/{id}", put(handlers::workflows::update_offboarding))
        .route(
            "/api/v1/offboarding/{id}/tasks/{task_id}",
            put(handlers::workflows::set_offboarding_task),
        )
        // Shifts
        .route("/api/v1/shifts", get(handlers::shifts::list).post(handlers::shifts::create))
        .route(
            "/api/v1/shifts/{id}",
            put(handlers::shifts::update).delete(handlers::shifts::delete),
        )
        .route(
            "/api/v1/shift-templates",
            get(handlers::shifts::list_templates).post(handlers::shifts::create_template),
        )
        // Surveys
        .route("/api/v1/surveys", get(handlers::surveys::list).post(handlers::surveys::create))
        .route("/api/v1/surveys/{id}", put(handlers::surveys::update))
        .route("/api/v1/surveys/{id}/responses", post(handlers::surveys::submit_response))
        // Audit trail
        .route("/api/v1/audit-logs", get(handlers::audit::list))
        // Dashboard
        .route("/api/v1/dashboard/stats", get(handlers::dashboard::stats))
        // Exports
        .route("/api/v1/exports/{kind}", get(handlers::exports::export))
        // Tenants
        .route("/api/v1/tenant", get(handlers::tenants::current))
        .route("/api/v1/tenant/features", get(handlers::tenants::current_features))
        .route("/api/v1/tenant/resolve", get(handlers::tenants::resolve))
        .route("/api/v1/tenants", post(handlers::tenants::create))
        .route(
            "/api/v1/tenants/{id}",
            get(handlers::tenants::get).put(handlers::tenants::update),
        )
        .route("/api/v1/tenants/{id}/features", get(handlers::tenants::features))
        .with_state(state)
}
