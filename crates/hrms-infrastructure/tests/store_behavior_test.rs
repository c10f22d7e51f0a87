//! End-to-end behavior of the in-memory store: derived statistics,
//! workflow progress, survey lifecycle, audit side effects.

use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;
use uuid::Uuid;

use hrms_core::domain::{
    AttendanceStatus, AuditAction, AuditFilter, LeaveRequestUpdate, LeaveStatus, LeaveType,
    NewAttendanceRecord, NewDepartment, NewEmployee, NewLeaveRequest, NewOnboardingWorkflow,
    NewSurvey, NewSurveyResponse, SurveyQuestion, SurveyQuestionKind, SurveyStatus, SurveyUpdate,
    TargetAudience, TaskCategory, TaskStatus, WorkflowTask,
};
use hrms_core::error::DomainError;
use hrms_infrastructure::{ExportFormat, ExportKind, HrStore};
use hrms_shared::Actor;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn actor() -> Actor {
    Actor::new("hr-1", "Sarah HR")
}

fn new_employee(badge: &str, department: &str) -> NewEmployee {
    NewEmployee {
        employee_id: badge.to_string(),
        name: format!("Employee {badge}"),
        email: format!("{}@company.com", badge.to_lowercase()),
        phone: String::new(),
        department: department.to_string(),
        position: "Developer".to_string(),
        join_date: d("2023-05-01"),
        salary: 60_000.0,
        status: Default::default(),
        avatar: None,
        address: String::new(),
        emergency_contact: String::new(),
    }
}

fn task(title: &str, category: TaskCategory) -> WorkflowTask {
    WorkflowTask {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: String::new(),
        category,
        assigned_to: "Sarah HR".to_string(),
        due_date: d("2024-02-05"),
        status: TaskStatus::Pending,
        completed_date: None,
        completed_by: None,
        notes: None,
    }
}

#[test]
fn adding_employee_bumps_total_by_one() {
    let mut store = HrStore::seeded().unwrap();
    let before = store.dashboard_stats_at(d("2024-01-22")).total_employees;

    store.add_employee(&actor(), new_employee("EMP010", "Engineering")).unwrap();

    let after = store.dashboard_stats_at(d("2024-01-22")).total_employees;
    assert_eq!(after, before + 1);
}

#[test]
fn approving_leave_decrements_pending_count() {
    let mut store = HrStore::seeded().unwrap();
    let pending_id = store
        .leave_requests()
        .iter()
        .find(|r| r.status == LeaveStatus::Pending)
        .map(|r| r.id)
        .unwrap();
    let before = store.dashboard_stats_at(d("2024-01-22")).pending_leaves;

    store
        .update_leave_request(
            &actor(),
            pending_id,
            LeaveRequestUpdate {
                status: Some(LeaveStatus::Approved),
                approved_by: Some("Sarah HR".to_string()),
                comments: None,
            },
        )
        .unwrap();

    let after = store.dashboard_stats_at(d("2024-01-22")).pending_leaves;
    assert_eq!(after, before - 1);
}

#[test]
fn absent_today_accounts_for_present_and_late() {
    let mut store = HrStore::new();
    store
        .add_department(
            &actor(),
            NewDepartment {
                name: "Engineering".to_string(),
                description: String::new(),
                head_id: None,
                budget: None,
            },
        )
        .unwrap();

    let mut ids = Vec::new();
    for n in 1..=3 {
        let e = store
            .add_employee(&actor(), new_employee(&format!("EMP{n:03}"), "Engineering"))
            .unwrap();
        ids.push(e.id);
    }

    let day = d("2024-01-22");
    store
        .add_attendance_record(
            &actor(),
            NewAttendanceRecord {
                employee_id: ids[0],
                date: day,
                check_in: t("09:00"),
                check_out: Some(t("17:00")),
                status: AttendanceStatus::Present,
                working_hours: None,
                notes: None,
            },
        )
        .unwrap();
    store
        .add_attendance_record(
            &actor(),
            NewAttendanceRecord {
                employee_id: ids[1],
                date: day,
                check_in: t("09:30"),
                check_out: None,
                status: AttendanceStatus::Late,
                working_hours: None,
                notes: None,
            },
        )
        .unwrap();

    let stats = store.dashboard_stats_at(day);
    assert_eq!(stats.present_today, 1);
    assert_eq!(stats.late_today, 1);
    assert_eq!(stats.absent_today, 1);
    assert_eq!(stats.average_working_hours, 8.0);
}

#[test]
fn onboarding_progress_follows_completed_ratio() {
    let mut store = HrStore::seeded().unwrap();
    let employee_id = store.employees()[0].id;

    let workflow = store
        .add_onboarding_workflow(
            &actor(),
            NewOnboardingWorkflow {
                employee_id,
                start_date: d("2024-02-01"),
                expected_completion_date: d("2024-02-15"),
                tasks: vec![
                    task("Sign paperwork", TaskCategory::Documentation),
                    task("Laptop setup", TaskCategory::Equipment),
                    task("Grant system access", TaskCategory::Access),
                    task("First-week training", TaskCategory::Training),
                ],
                assigned_hr: "Sarah HR".to_string(),
                notes: None,
            },
        )
        .unwrap();
    assert_eq!(workflow.progress, 0);

    let first_task = workflow.tasks[0].id;
    let updated = store
        .set_onboarding_task_status(&actor(), workflow.id, first_task, TaskStatus::Completed)
        .unwrap();
    assert_eq!(updated.progress, 25);
    assert_eq!(updated.tasks[0].completed_by.as_deref(), Some("Sarah HR"));

    // reopening the task walks the percentage back down
    let reopened = store
        .set_onboarding_task_status(&actor(), workflow.id, first_task, TaskStatus::Pending)
        .unwrap();
    assert_eq!(reopened.progress, 0);
    assert!(reopened.tasks[0].completed_date.is_none());
}

#[test]
fn survey_lifecycle_and_anonymity() {
    let mut store = HrStore::seeded().unwrap();
    let question_id = Uuid::new_v4();
    let survey = store
        .add_survey(
            &actor(),
            NewSurvey {
                title: "Q1 Engagement".to_string(),
                description: "Quarterly pulse".to_string(),
                end_date: d("2024-03-31"),
                is_anonymous: true,
                questions: vec![SurveyQuestion {
                    id: question_id,
                    kind: SurveyQuestionKind::Rating,
                    question: "How satisfied are you?".to_string(),
                    required: true,
                    options: None,
                }],
                target_audience: TargetAudience::All,
                target_value: None,
            },
        )
        .unwrap();

    let mut answers = HashMap::new();
    answers.insert(question_id, serde_json::json!(4));
    let respondent = store.employees()[0].id;

    // draft surveys refuse responses
    let err = store
        .submit_survey_response(
            survey.id,
            NewSurveyResponse {
                employee_id: respondent,
                employee_name: Some("Mike Johnson".to_string()),
                answers: answers.clone(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, DomainError::SurveyNotActive(_)));

    store
        .update_survey(
            &actor(),
            survey.id,
            SurveyUpdate { status: Some(SurveyStatus::Active), ..Default::default() },
        )
        .unwrap();

    let response = store
        .submit_survey_response(
            survey.id,
            NewSurveyResponse {
                employee_id: respondent,
                employee_name: Some("Mike Johnson".to_string()),
                answers,
            },
        )
        .unwrap();
    // anonymous surveys never keep the respondent's name
    assert!(response.employee_name.is_none());
    assert!(response.is_anonymous);
}

#[test]
fn export_leaves_one_audit_entry() {
    let mut store = HrStore::seeded().unwrap();
    let doc = store.export_data(&actor(), ExportKind::Employees, ExportFormat::Csv).unwrap();
    assert_eq!(doc.filename, "employees.csv");
    assert!(doc.content.contains("EMP001"));

    let exports = store.query_audit_logs(&AuditFilter {
        action: Some(AuditAction::Export),
        ..Default::default()
    });
    assert_eq!(exports.len(), 1);
    assert_eq!(exports[0].resource, "employees Data");
}

#[test]
fn failed_leave_request_leaves_no_trace() {
    let mut store = HrStore::seeded().unwrap();
    let employee_id = store.employees()[0].id;
    let audit_before = store.audit_logs().len();
    let leaves_before = store.leave_requests().len();

    let err = store
        .add_leave_request(
            &actor(),
            NewLeaveRequest {
                employee_id,
                leave_type: LeaveType::Vacation,
                start_date: d("2024-03-19"),
                end_date: d("2024-03-15"),
                reason: "Backwards range".to_string(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, DomainError::InvertedDateRange { .. }));

    assert_eq!(store.leave_requests().len(), leaves_before);
    assert_eq!(store.audit_logs().len(), audit_before);
}
