// ============================================================================
// HRMS Core - Calendar Sync Service
// File: crates/hrms-core/src/services/calendar_sync.rs
// ============================================================================
//! One-directional sync of leave requests and shifts to an external
//! calendar. Failures are reported, never retried.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{
    CalendarEvent, CalendarEventKind, CalendarEventStatus, CalendarIntegration, LeaveRequest,
    Shift,
};
use crate::error::DomainError;

/// Port to an external calendar provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalendarPort: Send + Sync {
    /// Creates the event and returns the provider's event id.
    async fn create_event(
        &self,
        integration: &CalendarIntegration,
        event: &CalendarEvent,
    ) -> Result<String, DomainError>;
}

pub struct CalendarSyncService<P: CalendarPort> {
    port: Arc<P>,
}

impl<P: CalendarPort> CalendarSyncService<P> {
    pub fn new(port: Arc<P>) -> Self {
        Self { port }
    }

    /// Pushes a leave request as an all-day event. Returns `None` when
    /// the integration or its leave toggle is disabled.
    pub async fn sync_leave_request(
        &self,
        integration: &CalendarIntegration,
        request: &LeaveRequest,
    ) -> Result<Option<String>, DomainError> {
        if !integration.is_enabled || !integration.sync_settings.sync_leaves {
            return Ok(None);
        }

        let mut title = request.leave_type.as_str().to_string();
        if let Some(first) = title.get_mut(0..1) {
            first.make_ascii_uppercase();
        }

        let event = CalendarEvent {
            tenant_id: integration.tenant_id,
            employee_id: request.employee_id,
            title: format!("{title} Leave"),
            description: Some(format!("Leave request: {}", request.reason)),
            start: request.start_date.format("%Y-%m-%d").to_string(),
            end: request.end_date.format("%Y-%m-%d").to_string(),
            kind: CalendarEventKind::Leave,
            is_all_day: true,
            location: None,
            status: CalendarEventStatus::Confirmed,
        };

        match self.port.create_event(integration, &event).await {
            Ok(event_id) => {
                info!("Synced leave request {} to calendar event {}", request.id, event_id);
                Ok(Some(event_id))
            }
            Err(e) => {
                warn!("Calendar sync failed for leave request {}: {}", request.id, e);
                Err(e)
            }
        }
    }

    /// Pushes a shift as a timed event. Returns `None` when the
    /// integration or its shift toggle is disabled.
    pub async fn sync_shift(
        &self,
        integration: &CalendarIntegration,
        shift: &Shift,
    ) -> Result<Option<String>, DomainError> {
        if !integration.is_enabled || !integration.sync_settings.sync_shifts {
            return Ok(None);
        }

        let date = shift.date.format("%Y-%m-%d");
        let event = CalendarEvent {
            tenant_id: integration.tenant_id,
            employee_id: shift.employee_id,
            title: format!("Work Shift: {}", shift.title),
            description: Some(format!(
                "Department: {}\nLocation: {}",
                shift.department,
                shift.location.as_deref().unwrap_or("Office")
            )),
            start: format!("{date}T{}:00", shift.start_time.format("%H:%M")),
            end: format!("{date}T{}:00", shift.end_time.format("%H:%M")),
            kind: CalendarEventKind::Shift,
            is_all_day: false,
            location: shift.location.clone(),
            status: CalendarEventStatus::Confirmed,
        };

        match self.port.create_event(integration, &event).await {
            Ok(event_id) => {
                info!("Synced shift {} to calendar event {}", shift.id, event_id);
                Ok(Some(event_id))
            }
            Err(e) => {
                warn!("Calendar sync failed for shift {}: {}", shift.id, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LeaveType, NewLeaveRequest, NewShift, SyncSettings};
    use chrono::{NaiveDate, NaiveTime};
    use uuid::Uuid;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn integration(enabled: bool, sync_leaves: bool, sync_shifts: bool) -> CalendarIntegration {
        CalendarIntegration {
            id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            calendar_id: "primary".to_string(),
            access_token: "token".to_string(),
            refresh_token: "refresh".to_string(),
            is_enabled: enabled,
            sync_settings: SyncSettings {
                sync_leaves,
                sync_shifts,
                sync_meetings: true,
                sync_holidays: true,
            },
            last_sync_at: None,
        }
    }

    fn leave_request() -> LeaveRequest {
        LeaveRequest::new(
            NewLeaveRequest {
                employee_id: Uuid::new_v4(),
                leave_type: LeaveType::Vacation,
                start_date: d("2024-02-15"),
                end_date: d("2024-02-19"),
                reason: "Family vacation".to_string(),
            },
            "Mike Johnson".to_string(),
            d("2024-01-20"),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_leave_sync_builds_all_day_event() {
        let mut port = MockCalendarPort::new();
        port.expect_create_event()
            .withf(|_, event| {
                event.title == "Vacation Leave"
                    && event.is_all_day
                    && event.start == "2024-02-15"
                    && event.end == "2024-02-19"
                    && event.kind == CalendarEventKind::Leave
            })
            .times(1)
            .returning(|_, _| Ok("evt-1".to_string()));

        let service = CalendarSyncService::new(Arc::new(port));
        let result = service
            .sync_leave_request(&integration(true, true, true), &leave_request())
            .await
            .unwrap();
        assert_eq!(result, Some("evt-1".to_string()));
    }

    #[tokio::test]
    async fn test_disabled_toggle_skips_sync() {
        let mut port = MockCalendarPort::new();
        port.expect_create_event().times(0);

        let service = CalendarSyncService::new(Arc::new(port));
        let result = service
            .sync_leave_request(&integration(true, false, true), &leave_request())
            .await
            .unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_failure_is_surfaced_not_retried() {
        let mut port = MockCalendarPort::new();
        port.expect_create_event()
            .times(1)
            .returning(|_, _| Err(DomainError::CalendarSyncFailed("upstream 503".to_string())));

        let service = CalendarSyncService::new(Arc::new(port));
        let err = service
            .sync_leave_request(&integration(true, true, true), &leave_request())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::CalendarSyncFailed(_)));
    }

    #[tokio::test]
    async fn test_shift_sync_builds_timed_event() {
        let shift = Shift::new(
            NewShift {
                title: "Morning Shift".to_string(),
                start_time: NaiveTime::parse_from_str("09:00", "%H:%M").unwrap(),
                end_time: NaiveTime::parse_from_str("17:00", "%H:%M").unwrap(),
                date: d("2024-02-01"),
                employee_id: Uuid::new_v4(),
                department: "Engineering".to_string(),
                location: None,
                notes: None,
            },
            "Mike Johnson".to_string(),
            "Sarah HR".to_string(),
            d("2024-01-20"),
        )
        .unwrap();

        let mut port = MockCalendarPort::new();
        port.expect_create_event()
            .withf(|_, event| {
                event.title == "Work Shift: Morning Shift"
                    && !event.is_all_day
                    && event.start == "2024-02-01T09:00:00"
                    && event.description.as_deref()
                        == Some("Department: Engineering\nLocation: Office")
            })
            .times(1)
            .returning(|_, _| Ok("evt-2".to_string()));

        let service = CalendarSyncService::new(Arc::new(port));
        let result = service.sync_shift(&integration(true, true, true), &shift).await.unwrap();
        assert_eq!(result, Some("evt-2".to_string()));
    }
}
