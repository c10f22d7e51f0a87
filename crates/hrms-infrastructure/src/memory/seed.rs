//! Demo dataset for local development and tests

use chrono::{NaiveDate, NaiveTime};

use hrms_core::domain::{
    AttendanceStatus, LeaveRequestUpdate, LeaveStatus, LeaveType, NewAttendanceRecord,
    NewDepartment, NewEmployee, NewLeaveRequest,
};
use hrms_core::error::DomainError;
use hrms_shared::Actor;

use super::hr_store::HrStore;

fn date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| DomainError::InternalError(format!("seed date {s}: {e}")))
}

fn time(s: &str) -> Result<NaiveTime, DomainError> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|e| DomainError::InternalError(format!("seed time {s}: {e}")))
}

/// Fills an empty store with the demo departments, employees, leave
/// requests, and attendance records. All entries go through the normal
/// mutation path, so the audit trail reflects them as system actions.
pub fn populate(store: &mut HrStore) -> Result<(), DomainError> {
    let system = Actor::system();

    for (name, description, budget) in [
        ("Engineering", "Software development and technical operations", 500_000.0),
        ("Marketing", "Brand, growth, and communications", 200_000.0),
        ("Human Resources", "People operations and recruitment", 150_000.0),
    ] {
        store.add_department(
            &system,
            NewDepartment {
                name: name.to_string(),
                description: description.to_string(),
                head_id: None,
                budget: Some(budget),
            },
        )?;
    }

    let mike = store.add_employee(
        &system,
        NewEmployee {
            employee_id: "EMP001".to_string(),
            name: "Mike Johnson".to_string(),
            email: "mike.johnson@company.com".to_string(),
            phone: "+1-555-0123".to_string(),
            department: "Engineering".to_string(),
            position: "Senior Developer".to_string(),
            join_date: date("2023-01-15")?,
            salary: 85_000.0,
            status: Default::default(),
            avatar: None,
            address: "123 Main St, City, State".to_string(),
            emergency_contact: "+1-555-0124".to_string(),
        },
    )?;

    let sarah = store.add_employee(
        &system,
        NewEmployee {
            employee_id: "EMP002".to_string(),
            name: "Sarah Wilson".to_string(),
            email: "sarah.wilson@company.com".to_string(),
            phone: "+1-555-0125".to_string(),
            department: "Marketing".to_string(),
            position: "Marketing Manager".to_string(),
            join_date: date("2022-08-20")?,
            salary: 75_000.0,
            status: Default::default(),
            avatar: None,
            address: "456 Oak Ave, City, State".to_string(),
            emergency_contact: "+1-555-0126".to_string(),
        },
    )?;

    store.add_employee(
        &system,
        NewEmployee {
            employee_id: "EMP003".to_string(),
            name: "David Chen".to_string(),
            email: "david.chen@company.com".to_string(),
            phone: "+1-555-0127".to_string(),
            department: "Human Resources".to_string(),
            position: "HR Specialist".to_string(),
            join_date: date("2023-03-10")?,
            salary: 60_000.0,
            status: Default::default(),
            avatar: None,
            address: "789 Pine Rd, City, State".to_string(),
            emergency_contact: "+1-555-0128".to_string(),
        },
    )?;

    store.add_leave_request(
        &system,
        NewLeaveRequest {
            employee_id: mike.id,
            leave_type: LeaveType::Vacation,
            start_date: date("2024-02-15")?,
            end_date: date("2024-02-19")?,
            reason: "Family vacation".to_string(),
        },
    )?;

    let sick = store.add_leave_request(
        &system,
        NewLeaveRequest {
            employee_id: sarah.id,
            leave_type: LeaveType::Sick,
            start_date: date("2024-01-25")?,
            end_date: date("2024-01-25")?,
            reason: "Medical appointment".to_string(),
        },
    )?;
    store.update_leave_request(
        &system,
        sick.id,
        LeaveRequestUpdate {
            status: Some(LeaveStatus::Approved),
            approved_by: Some("HR Manager".to_string()),
            comments: None,
        },
    )?;

    let attendance = [
        (mike.id, "09:00", Some("17:30"), AttendanceStatus::Present),
        (sarah.id, "09:15", Some("17:45"), AttendanceStatus::Late),
    ];
    for (employee_id, check_in, check_out, status) in attendance {
        store.add_attendance_record(
            &system,
            NewAttendanceRecord {
                employee_id,
                date: date("2024-01-22")?,
                check_in: time(check_in)?,
                check_out: check_out.map(time).transpose()?,
                status,
                working_hours: None,
                notes: None,
            },
        )?;
    }

    store.add_attendance_record(
        &system,
        NewAttendanceRecord {
            employee_id: mike.id,
            date: date("2024-01-23")?,
            check_in: time("08:55")?,
            check_out: None,
            status: AttendanceStatus::Present,
            working_hours: None,
            notes: Some("Forgot to check out".to_string()),
        },
    )?;

    Ok(())
}
