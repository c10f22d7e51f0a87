// ============================================================================
// HRMS Infrastructure - Google Calendar Client
// File: crates/hrms-infrastructure/src/google/mod.rs
// Description: HTTP adapter implementing the calendar port
// ============================================================================

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use hrms_core::domain::{CalendarEvent, CalendarIntegration};
use hrms_core::error::DomainError;
use hrms_core::services::CalendarPort;
use hrms_shared::config::CalendarSettings;

/// Thin client over the Google Calendar events endpoint. The caller's
/// access token is used as-is; refresh is out of scope here.
pub struct GoogleCalendarClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct EventTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(rename = "dateTime", skip_serializing_if = "Option::is_none")]
    date_time: Option<String>,
}

#[derive(Debug, Serialize)]
struct InsertEventRequest {
    summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    start: EventTime,
    end: EventTime,
    #[serde(rename = "colorId")]
    color_id: String,
}

#[derive(Debug, Deserialize)]
struct InsertEventResponse {
    id: String,
}

fn event_time(value: &str, all_day: bool) -> EventTime {
    if all_day {
        EventTime { date: Some(value.to_string()), date_time: None }
    } else {
        EventTime { date: None, date_time: Some(value.to_string()) }
    }
}

impl GoogleCalendarClient {
    pub fn new(settings: &CalendarSettings) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| DomainError::InternalError(format!("http client: {e}")))?;

        Ok(Self { http, base_url: settings.api_base_url.trim_end_matches('/').to_string() })
    }
}

#[async_trait]
impl CalendarPort for GoogleCalendarClient {
    async fn create_event(
        &self,
        integration: &CalendarIntegration,
        event: &CalendarEvent,
    ) -> Result<String, DomainError> {
        let url = format!("{}/calendars/{}/events", self.base_url, integration.calendar_id);
        let body = InsertEventRequest {
            summary: event.title.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            start: event_time(&event.start, event.is_all_day),
            end: event_time(&event.end, event.is_all_day),
            color_id: event.kind.color_id().to_string(),
        };

        debug!("Creating calendar event '{}' on {}", event.title, integration.calendar_id);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&integration.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::CalendarSyncFailed(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(DomainError::CalendarSyncFailed(format!(
                "upstream returned {}",
                response.status()
            )));
        }

        let created: InsertEventResponse = response
            .json()
            .await
            .map_err(|e| DomainError::CalendarSyncFailed(format!("invalid response: {e}")))?;
        Ok(created.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrms_core::domain::{CalendarEventKind, CalendarEventStatus, SyncSettings};
    use uuid::Uuid;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn integration() -> CalendarIntegration {
        CalendarIntegration {
            id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            calendar_id: "primary".to_string(),
            access_token: "test-token".to_string(),
            refresh_token: "refresh".to_string(),
            is_enabled: true,
            sync_settings: SyncSettings {
                sync_leaves: true,
                sync_shifts: true,
                sync_meetings: true,
                sync_holidays: true,
            },
            last_sync_at: None,
        }
    }

    fn all_day_event() -> CalendarEvent {
        CalendarEvent {
            tenant_id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            title: "Vacation Leave".to_string(),
            description: Some("Leave request: Family vacation".to_string()),
            start: "2024-02-15".to_string(),
            end: "2024-02-19".to_string(),
            kind: CalendarEventKind::Leave,
            is_all_day: true,
            location: None,
            status: CalendarEventStatus::Confirmed,
        }
    }

    fn client(server: &MockServer) -> GoogleCalendarClient {
        GoogleCalendarClient::new(&CalendarSettings {
            api_base_url: server.uri(),
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_all_day_event_uses_date_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/calendars/primary/events"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_partial_json(serde_json::json!({
                "summary": "Vacation Leave",
                "start": { "date": "2024-02-15" },
                "end": { "date": "2024-02-19" },
                "colorId": "2"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "evt-123"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let event_id =
            client(&server).create_event(&integration(), &all_day_event()).await.unwrap();
        assert_eq!(event_id, "evt-123");
    }

    #[tokio::test]
    async fn test_timed_event_uses_datetime_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/calendars/primary/events"))
            .and(body_partial_json(serde_json::json!({
                "start": { "dateTime": "2024-02-01T09:00:00" },
                "colorId": "9"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "evt-456"
            })))
            .mount(&server)
            .await;

        let mut event = all_day_event();
        event.title = "Work Shift: Morning Shift".to_string();
        event.start = "2024-02-01T09:00:00".to_string();
        event.end = "2024-02-01T17:00:00".to_string();
        event.kind = CalendarEventKind::Shift;
        event.is_all_day = false;

        let event_id = client(&server).create_event(&integration(), &event).await.unwrap();
        assert_eq!(event_id, "evt-456");
    }

    #[tokio::test]
    async fn test_upstream_error_maps_to_sync_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err =
            client(&server).create_event(&integration(), &all_day_event()).await.unwrap_err();
        assert!(matches!(err, DomainError::CalendarSyncFailed(_)));
    }
}
