//! Attendance record domain entity

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Attendance status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    HalfDay,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
            AttendanceStatus::HalfDay => "half-day",
        }
    }
}

/// Attendance record entity. At most one record per (employee, date).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub date: NaiveDate,
    pub check_in: NaiveTime,
    pub check_out: Option<NaiveTime>,
    pub status: AttendanceStatus,
    pub working_hours: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAttendanceRecord {
    pub employee_id: Uuid,
    pub date: NaiveDate,
    pub check_in: NaiveTime,
    pub check_out: Option<NaiveTime>,
    pub status: AttendanceStatus,
    pub working_hours: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceUpdate {
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub status: Option<AttendanceStatus>,
    pub working_hours: Option<f64>,
    pub notes: Option<String>,
}

impl AttendanceRecord {
    pub fn new(payload: NewAttendanceRecord, employee_name: String) -> Self {
        let working_hours = payload
            .working_hours
            .or_else(|| payload.check_out.map(|out| span_hours(payload.check_in, out)));

        Self {
            id: Uuid::new_v4(),
            employee_id: payload.employee_id,
            employee_name,
            date: payload.date,
            check_in: payload.check_in,
            check_out: payload.check_out,
            status: payload.status,
            working_hours,
            notes: payload.notes,
        }
    }

    pub fn apply(&mut self, update: AttendanceUpdate) {
        if let Some(check_in) = update.check_in {
            self.check_in = check_in;
        }
        if let Some(check_out) = update.check_out {
            self.check_out = Some(check_out);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(working_hours) = update.working_hours {
            self.working_hours = Some(working_hours);
        } else if let Some(out) = self.check_out {
            self.working_hours = Some(span_hours(self.check_in, out));
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
    }
}

fn span_hours(check_in: NaiveTime, check_out: NaiveTime) -> f64 {
    (check_out - check_in).num_minutes() as f64 / 60.0
}
