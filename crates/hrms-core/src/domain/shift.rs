//! Shift scheduling domain entities

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Shift status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    Scheduled,
    Confirmed,
    Completed,
    Missed,
    Cancelled,
}

impl ShiftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftStatus::Scheduled => "scheduled",
            ShiftStatus::Confirmed => "confirmed",
            ShiftStatus::Completed => "completed",
            ShiftStatus::Missed => "missed",
            ShiftStatus::Cancelled => "cancelled",
        }
    }

    /// Scheduled shifts are confirmed or cancelled; confirmed shifts
    /// finish as completed, missed, or cancelled.
    pub fn can_transition_to(&self, next: ShiftStatus) -> bool {
        matches!(
            (self, next),
            (ShiftStatus::Scheduled, ShiftStatus::Confirmed)
                | (ShiftStatus::Scheduled, ShiftStatus::Cancelled)
                | (ShiftStatus::Confirmed, ShiftStatus::Completed)
                | (ShiftStatus::Confirmed, ShiftStatus::Missed)
                | (ShiftStatus::Confirmed, ShiftStatus::Cancelled)
        )
    }
}

/// Shift entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    pub id: Uuid,
    pub title: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub date: NaiveDate,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub department: String,
    pub status: ShiftStatus,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_by: String,
    pub created_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShift {
    pub title: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub date: NaiveDate,
    pub employee_id: Uuid,
    pub department: String,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiftUpdate {
    pub title: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub date: Option<NaiveDate>,
    pub status: Option<ShiftStatus>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Reusable shift definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftTemplate {
    pub id: Uuid,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub department: String,
    pub required_employees: i32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShiftTemplate {
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub department: String,
    pub required_employees: i32,
    pub description: Option<String>,
}

impl Shift {
    pub fn new(
        payload: NewShift,
        employee_name: String,
        created_by: String,
        today: NaiveDate,
    ) -> Result<Self, DomainError> {
        if payload.start_time >= payload.end_time {
            return Err(DomainError::InvertedTimeRange {
                start: payload.start_time.format("%H:%M").to_string(),
                end: payload.end_time.format("%H:%M").to_string(),
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title: payload.title,
            start_time: payload.start_time,
            end_time: payload.end_time,
            date: payload.date,
            employee_id: payload.employee_id,
            employee_name,
            department: payload.department,
            status: ShiftStatus::Scheduled,
            location: payload.location,
            notes: payload.notes,
            created_by,
            created_date: today,
        })
    }

    pub fn apply(&mut self, update: ShiftUpdate) -> Result<(), DomainError> {
        if let Some(next) = update.status {
            if next != self.status {
                if !self.status.can_transition_to(next) {
                    return Err(DomainError::InvalidStatusTransition {
                        from: self.status.as_str().to_string(),
                        to: next.as_str().to_string(),
                    });
                }
                self.status = next;
            }
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(start_time) = update.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = update.end_time {
            self.end_time = end_time;
        }
        if self.start_time >= self.end_time {
            return Err(DomainError::InvertedTimeRange {
                start: self.start_time.format("%H:%M").to_string(),
                end: self.end_time.format("%H:%M").to_string(),
            });
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(location) = update.location {
            self.location = Some(location);
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        Ok(())
    }
}

impl ShiftTemplate {
    pub fn new(payload: NewShiftTemplate) -> Result<Self, DomainError> {
        if payload.start_time >= payload.end_time {
            return Err(DomainError::InvertedTimeRange {
                start: payload.start_time.format("%H:%M").to_string(),
                end: payload.end_time.format("%H:%M").to_string(),
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: payload.name,
            start_time: payload.start_time,
            end_time: payload.end_time,
            department: payload.department,
            required_employees: payload.required_employees,
            description: payload.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn shift() -> Shift {
        Shift::new(
            NewShift {
                title: "Morning Shift".to_string(),
                start_time: t("09:00"),
                end_time: t("17:00"),
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
        .unwrap()
    }

    #[test]
    fn test_inverted_times_rejected() {
        let err = Shift::new(
            NewShift {
                title: "Backwards".to_string(),
                start_time: t("17:00"),
                end_time: t("09:00"),
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
        .unwrap_err();
        assert!(matches!(err, DomainError::InvertedTimeRange { .. }));
    }

    #[test]
    fn test_shift_lifecycle() {
        let mut s = shift();
        assert_eq!(s.status, ShiftStatus::Scheduled);
        s.apply(ShiftUpdate { status: Some(ShiftStatus::Confirmed), ..Default::default() }).unwrap();
        s.apply(ShiftUpdate { status: Some(ShiftStatus::Completed), ..Default::default() }).unwrap();

        let err = s
            .apply(ShiftUpdate { status: Some(ShiftStatus::Scheduled), ..Default::default() })
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidStatusTransition { .. }));
    }

    #[test]
    fn test_scheduled_cannot_skip_to_missed() {
        let mut s = shift();
        let err = s
            .apply(ShiftUpdate { status: Some(ShiftStatus::Missed), ..Default::default() })
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidStatusTransition { .. }));
    }
}
