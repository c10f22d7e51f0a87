//! Export document rendering
//!
//! Byte-exact PDF output is out of scope; the `pdf` format renders the
//! same rows as plain text. The audit side effect lives in the store,
//! not here.

use serde::{Deserialize, Serialize};

use hrms_core::domain::{AttendanceRecord, Employee, LeaveRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Employees,
    Leave,
    Attendance,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Employees => "employees",
            ExportKind::Leave => "leave",
            ExportKind::Attendance => "attendance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument {
    pub filename: String,
    pub content_type: String,
    pub content: String,
}

fn csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

pub fn render_employees(employees: &[Employee]) -> String {
    let mut out = String::from("employee_id,name,email,department,position,join_date,salary,status\n");
    for e in employees {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            csv_field(&e.employee_id),
            csv_field(&e.name),
            csv_field(&e.email),
            csv_field(&e.department),
            csv_field(&e.position),
            e.join_date,
            e.salary,
            e.status.as_str(),
        ));
    }
    out
}

pub fn render_leave(requests: &[LeaveRequest]) -> String {
    let mut out = String::from("employee,type,start_date,end_date,days,status,applied_date\n");
    for r in requests {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            csv_field(&r.employee_name),
            r.leave_type.as_str(),
            r.start_date,
            r.end_date,
            r.days,
            r.status.as_str(),
            r.applied_date,
        ));
    }
    out
}

pub fn render_attendance(records: &[AttendanceRecord]) -> String {
    let mut out = String::from("employee,date,check_in,check_out,status,working_hours\n");
    for r in records {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            csv_field(&r.employee_name),
            r.date,
            r.check_in.format("%H:%M"),
            r.check_out.map(|t| t.format("%H:%M").to_string()).unwrap_or_default(),
            r.status.as_str(),
            r.working_hours.map(|h| h.to_string()).unwrap_or_default(),
        ));
    }
    out
}

pub fn document(kind: ExportKind, format: ExportFormat, body: String) -> ExportDocument {
    match format {
        ExportFormat::Csv => ExportDocument {
            filename: format!("{}.csv", kind.as_str()),
            content_type: "text/csv".to_string(),
            content: body,
        },
        ExportFormat::Pdf => ExportDocument {
            filename: format!("{}.txt", kind.as_str()),
            content_type: "text/plain".to_string(),
            content: body,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hrms_core::domain::{EmployeeStatus, NewEmployee};

    #[test]
    fn test_csv_escapes_commas() {
        let employee = Employee::new(NewEmployee {
            employee_id: "EMP001".to_string(),
            name: "Johnson, Mike".to_string(),
            email: "mike@company.com".to_string(),
            phone: String::new(),
            department: "Engineering".to_string(),
            position: "Senior Developer".to_string(),
            join_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            salary: 85_000.0,
            status: EmployeeStatus::Active,
            avatar: None,
            address: String::new(),
            emergency_contact: String::new(),
        })
        .unwrap();

        let csv = render_employees(&[employee]);
        assert!(csv.contains("\"Johnson, Mike\""));
        assert!(csv.starts_with("employee_id,name,email"));
    }
}
