// ============================================================================
// HRMS Core - Dashboard Statistics
// File: crates/hrms-core/src/domain/stats.rs
// Description: Aggregate statistics derived from the HR collections
// ============================================================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::attendance::{AttendanceRecord, AttendanceStatus};
use super::department::Department;
use super::employee::Employee;
use super::leave::{LeaveRequest, LeaveStatus};
use super::review::{PerformanceReview, ReviewStatus};
use super::shift::{Shift, ShiftStatus};
use super::workflow::{OnboardingWorkflow, WorkflowStatus};

/// Aggregate dashboard numbers. Never stored; always a pure function of
/// the current collections so there is no stale cache to invalidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub total_departments: usize,
    pub pending_leaves: usize,
    pub present_today: usize,
    pub absent_today: usize,
    pub late_today: usize,
    pub new_hires_this_month: usize,
    pub average_working_hours: f64,
    pub pending_reviews: usize,
    pub active_onboarding: usize,
    pub upcoming_shifts: usize,
}

impl DashboardStats {
    #[allow(clippy::too_many_arguments)]
    pub fn compute(
        employees: &[Employee],
        departments: &[Department],
        leave_requests: &[LeaveRequest],
        attendance_records: &[AttendanceRecord],
        reviews: &[PerformanceReview],
        onboarding_workflows: &[OnboardingWorkflow],
        shifts: &[Shift],
        today: NaiveDate,
    ) -> Self {
        let total_employees = employees.iter().filter(|e| e.is_active()).count();
        let pending_leaves =
            leave_requests.iter().filter(|r| r.status == LeaveStatus::Pending).count();

        let todays: Vec<&AttendanceRecord> =
            attendance_records.iter().filter(|r| r.date == today).collect();
        let present_today =
            todays.iter().filter(|r| r.status == AttendanceStatus::Present).count();
        let late_today = todays.iter().filter(|r| r.status == AttendanceStatus::Late).count();
        let absent_today =
            total_employees.saturating_sub(present_today).saturating_sub(late_today);

        let new_hires_this_month = employees
            .iter()
            .filter(|e| {
                e.join_date.year() == today.year() && e.join_date.month() == today.month()
            })
            .count();

        let hours: Vec<f64> = todays.iter().filter_map(|r| r.working_hours).collect();
        let average_working_hours = if hours.is_empty() {
            0.0
        } else {
            hours.iter().sum::<f64>() / hours.len() as f64
        };

        let pending_reviews =
            reviews.iter().filter(|r| r.status == ReviewStatus::InProgress).count();
        let active_onboarding = onboarding_workflows
            .iter()
            .filter(|w| w.status == WorkflowStatus::InProgress)
            .count();
        let upcoming_shifts = shifts
            .iter()
            .filter(|s| s.date >= today && s.status == ShiftStatus::Scheduled)
            .count();

        Self {
            total_employees,
            total_departments: departments.len(),
            pending_leaves,
            present_today,
            absent_today,
            late_today,
            new_hires_this_month,
            average_working_hours,
            pending_reviews,
            active_onboarding,
            upcoming_shifts,
        }
    }
}
