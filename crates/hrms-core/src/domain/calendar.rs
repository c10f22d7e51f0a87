//! Calendar integration domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarEventKind {
    Leave,
    Shift,
    Meeting,
    Training,
    Holiday,
}

impl CalendarEventKind {
    /// Google Calendar color id for the event kind.
    pub fn color_id(&self) -> &'static str {
        match self {
            CalendarEventKind::Leave => "2",
            CalendarEventKind::Shift => "9",
            CalendarEventKind::Meeting => "5",
            CalendarEventKind::Training => "6",
            CalendarEventKind::Holiday => "11",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarEventStatus {
    Confirmed,
    Tentative,
    Cancelled,
}

/// Provider-neutral calendar event representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub tenant_id: Uuid,
    pub employee_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// RFC 3339 datetime for timed events, `YYYY-MM-DD` for all-day events.
    pub start: String,
    pub end: String,
    pub kind: CalendarEventKind,
    pub is_all_day: bool,
    pub location: Option<String>,
    pub status: CalendarEventStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncSettings {
    pub sync_leaves: bool,
    pub sync_shifts: bool,
    pub sync_meetings: bool,
    pub sync_holidays: bool,
}

/// A stored per-employee link to an external calendar. Token lifecycle
/// management is out of scope; the record carries whatever tokens it
/// was given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarIntegration {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub employee_id: Uuid,
    pub calendar_id: String,
    pub access_token: String,
    pub refresh_token: String,
    pub is_enabled: bool,
    pub sync_settings: SyncSettings,
    pub last_sync_at: Option<DateTime<Utc>>,
}
