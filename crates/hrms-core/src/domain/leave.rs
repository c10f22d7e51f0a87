// ============================================================================
// HRMS Core - Leave Request Entity
// File: crates/hrms-core/src/domain/leave.rs
// Description: Leave request with derived day span and approval lifecycle
// ============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use hrms_shared::utils::inclusive_day_count;

/// Leave type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Vacation,
    Sick,
    Personal,
    Maternity,
    Paternity,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Vacation => "vacation",
            LeaveType::Sick => "sick",
            LeaveType::Personal => "personal",
            LeaveType::Maternity => "maternity",
            LeaveType::Paternity => "paternity",
        }
    }
}

/// Leave request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    /// Pending may move to approved or rejected; both are terminal.
    pub fn can_transition_to(&self, next: LeaveStatus) -> bool {
        matches!(
            (self, next),
            (LeaveStatus::Pending, LeaveStatus::Approved)
                | (LeaveStatus::Pending, LeaveStatus::Rejected)
        )
    }
}

/// Leave request entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Inclusive day span, derived from the date range. Never taken
    /// from the caller.
    pub days: i64,

    pub reason: String,
    pub status: LeaveStatus,
    pub applied_date: NaiveDate,
    pub approved_by: Option<String>,
    pub approved_date: Option<NaiveDate>,
    pub comments: Option<String>,
}

/// Payload for filing a leave request. Status and applied date are
/// assigned by the store; days are derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLeaveRequest {
    pub employee_id: Uuid,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaveRequestUpdate {
    pub status: Option<LeaveStatus>,
    pub approved_by: Option<String>,
    pub comments: Option<String>,
}

impl LeaveRequest {
    pub fn new(
        payload: NewLeaveRequest,
        employee_name: String,
        today: NaiveDate,
    ) -> Result<Self, DomainError> {
        let days = inclusive_day_count(payload.start_date, payload.end_date).ok_or(
            DomainError::InvertedDateRange {
                start: payload.start_date,
                end: payload.end_date,
            },
        )?;

        Ok(Self {
            id: Uuid::new_v4(),
            employee_id: payload.employee_id,
            employee_name,
            leave_type: payload.leave_type,
            start_date: payload.start_date,
            end_date: payload.end_date,
            days,
            reason: payload.reason,
            status: LeaveStatus::Pending,
            applied_date: today,
            approved_by: None,
            approved_date: None,
            comments: None,
        })
    }

    /// Applies a partial update, enforcing the status lifecycle. An
    /// approval or rejection stamps the decision date.
    pub fn apply(&mut self, update: LeaveRequestUpdate, today: NaiveDate) -> Result<(), DomainError> {
        if let Some(next) = update.status {
            if next != self.status {
                if !self.status.can_transition_to(next) {
                    return Err(DomainError::InvalidStatusTransition {
                        from: self.status.as_str().to_string(),
                        to: next.as_str().to_string(),
                    });
                }
                self.status = next;
                self.approved_date = Some(today);
                if let Some(approved_by) = update.approved_by {
                    self.approved_by = Some(approved_by);
                }
            }
        }
        if let Some(comments) = update.comments {
            self.comments = Some(comments);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn request(start: &str, end: &str) -> Result<LeaveRequest, DomainError> {
        LeaveRequest::new(
            NewLeaveRequest {
                employee_id: Uuid::new_v4(),
                leave_type: LeaveType::Vacation,
                start_date: d(start),
                end_date: d(end),
                reason: "Family vacation".to_string(),
            },
            "Mike Johnson".to_string(),
            d("2024-01-20"),
        )
    }

    #[test]
    fn test_days_are_derived_inclusively() {
        let req = request("2024-03-15", "2024-03-19").unwrap();
        assert_eq!(req.days, 5);
        assert_eq!(req.status, LeaveStatus::Pending);
        assert_eq!(req.applied_date, d("2024-01-20"));
    }

    #[test]
    fn test_single_day_leave() {
        assert_eq!(request("2024-01-25", "2024-01-25").unwrap().days, 1);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = request("2024-03-19", "2024-03-15").unwrap_err();
        assert!(matches!(err, DomainError::InvertedDateRange { .. }));
    }

    #[test]
    fn test_approval_is_terminal() {
        let mut req = request("2024-02-15", "2024-02-19").unwrap();
        req.apply(
            LeaveRequestUpdate {
                status: Some(LeaveStatus::Approved),
                approved_by: Some("HR Manager".to_string()),
                comments: None,
            },
            d("2024-01-24"),
        )
        .unwrap();
        assert_eq!(req.status, LeaveStatus::Approved);
        assert_eq!(req.approved_date, Some(d("2024-01-24")));

        let err = req
            .apply(
                LeaveRequestUpdate {
                    status: Some(LeaveStatus::Rejected),
                    ..Default::default()
                },
                d("2024-01-25"),
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidStatusTransition { .. }));
    }
}
