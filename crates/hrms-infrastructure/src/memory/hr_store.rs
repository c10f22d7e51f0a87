// ============================================================================
// HRMS Infrastructure - HR Store
// File: crates/hrms-infrastructure/src/memory/hr_store.rs
// Description: Single source of truth for all HR entities of a tenant
// ============================================================================
//! In-memory domain store. All mutations are validated, audited, and
//! reported explicitly; dashboard statistics are derived on read.

use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use hrms_core::domain::{
    AttendanceRecord, AttendanceUpdate, AuditAction, AuditFilter, AuditLog, DashboardStats,
    Department, DepartmentUpdate, Employee, EmployeeUpdate, LeaveRequest, LeaveRequestUpdate,
    NewAttendanceRecord, NewDepartment, NewEmployee, NewLeaveRequest, NewOffboardingWorkflow,
    NewOnboardingWorkflow, NewPerformanceReview, NewShift, NewShiftTemplate, NewSurvey,
    NewSurveyResponse, OffboardingWorkflow, OnboardingWorkflow, PerformanceReview, ReviewUpdate,
    Shift, ShiftTemplate, ShiftUpdate, Survey, SurveyResponse, SurveyUpdate, TaskStatus,
    WorkflowUpdate,
};
use hrms_core::error::DomainError;
use hrms_shared::Actor;

use super::audit_trail::AuditTrail;
use super::export::{self, ExportDocument, ExportFormat, ExportKind};

/// Owns every HR collection for the active tenant. Deleting an employee
/// retains their historical records (leave, attendance, reviews,
/// shifts); aggregates only count active employees, so no cascade is
/// needed to keep the numbers consistent.
#[derive(Debug, Default)]
pub struct HrStore {
    employees: Vec<Employee>,
    departments: Vec<Department>,
    leave_requests: Vec<LeaveRequest>,
    attendance_records: Vec<AttendanceRecord>,
    performance_reviews: Vec<PerformanceReview>,
    onboarding_workflows: Vec<OnboardingWorkflow>,
    offboarding_workflows: Vec<OffboardingWorkflow>,
    shifts: Vec<Shift>,
    shift_templates: Vec<ShiftTemplate>,
    surveys: Vec<Survey>,
    audit: AuditTrail,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

impl HrStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the demo dataset.
    pub fn seeded() -> Result<Self, DomainError> {
        let mut store = Self::new();
        super::seed::populate(&mut store)?;
        Ok(store)
    }

    // ------------------------------------------------------------------
    // Read surface
    // ------------------------------------------------------------------

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn leave_requests(&self) -> &[LeaveRequest] {
        &self.leave_requests
    }

    pub fn attendance_records(&self) -> &[AttendanceRecord] {
        &self.attendance_records
    }

    pub fn performance_reviews(&self) -> &[PerformanceReview] {
        &self.performance_reviews
    }

    pub fn onboarding_workflows(&self) -> &[OnboardingWorkflow] {
        &self.onboarding_workflows
    }

    pub fn offboarding_workflows(&self) -> &[OffboardingWorkflow] {
        &self.offboarding_workflows
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn shift_templates(&self) -> &[ShiftTemplate] {
        &self.shift_templates
    }

    pub fn surveys(&self) -> &[Survey] {
        &self.surveys
    }

    pub fn audit_logs(&self) -> &[AuditLog] {
        self.audit.entries()
    }

    pub fn query_audit_logs(&self, filter: &AuditFilter) -> Vec<AuditLog> {
        self.audit.query(filter).into_iter().cloned().collect()
    }

    pub fn active_employee_count(&self) -> usize {
        self.employees.iter().filter(|e| e.is_active()).count()
    }

    /// Derived on every read; there is no cached snapshot to go stale.
    pub fn dashboard_stats(&self) -> DashboardStats {
        self.dashboard_stats_at(today())
    }

    pub fn dashboard_stats_at(&self, date: NaiveDate) -> DashboardStats {
        DashboardStats::compute(
            &self.employees,
            &self.departments,
            &self.leave_requests,
            &self.attendance_records,
            &self.performance_reviews,
            &self.onboarding_workflows,
            &self.shifts,
            date,
        )
    }

    // ------------------------------------------------------------------
    // Lookup helpers
    // ------------------------------------------------------------------

    fn employee_name(&self, id: Uuid) -> Result<String, DomainError> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.name.clone())
            .ok_or(DomainError::UnknownEmployee(id))
    }

    fn department_exists(&self, name: &str) -> bool {
        self.departments.iter().any(|d| d.name.eq_ignore_ascii_case(name))
    }

    // ------------------------------------------------------------------
    // Employees
    // ------------------------------------------------------------------

    pub fn add_employee(
        &mut self,
        actor: &Actor,
        payload: NewEmployee,
    ) -> Result<Employee, DomainError> {
        let badge = payload.employee_id.trim();
        if self.employees.iter().any(|e| e.employee_id == badge) {
            return Err(DomainError::EmployeeIdAlreadyExists(badge.to_string()));
        }
        if !self.department_exists(&payload.department) {
            return Err(DomainError::UnknownDepartment(payload.department));
        }

        let employee = Employee::new(payload)?;
        self.audit.record(
            actor,
            AuditAction::Create,
            "Employee",
            Some(employee.id.to_string()),
            format!("Created employee {}", employee.name),
        );
        info!("Added employee {} ({})", employee.name, employee.employee_id);
        self.employees.push(employee.clone());
        Ok(employee)
    }

    pub fn update_employee(
        &mut self,
        actor: &Actor,
        id: Uuid,
        update: EmployeeUpdate,
    ) -> Result<Employee, DomainError> {
        if let Some(department) = &update.department {
            if !self.department_exists(department) {
                return Err(DomainError::UnknownDepartment(department.clone()));
            }
        }

        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(DomainError::EmployeeNotFound(id))?;
        employee.apply(update)?;
        let updated = employee.clone();

        self.audit.record(
            actor,
            AuditAction::Update,
            "Employee",
            Some(id.to_string()),
            format!("Updated employee {}", updated.name),
        );
        Ok(updated)
    }

    pub fn delete_employee(&mut self, actor: &Actor, id: Uuid) -> Result<(), DomainError> {
        let index = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(DomainError::EmployeeNotFound(id))?;
        let removed = self.employees.remove(index);

        // Historical leave/attendance/review/shift records referencing
        // the employee are retained intentionally.
        self.audit.record(
            actor,
            AuditAction::Delete,
            "Employee",
            Some(id.to_string()),
            format!("Deleted employee {}", removed.name),
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Departments
    // ------------------------------------------------------------------

    pub fn add_department(
        &mut self,
        actor: &Actor,
        payload: NewDepartment,
    ) -> Result<Department, DomainError> {
        if self.department_exists(payload.name.trim()) {
            return Err(DomainError::DepartmentNameAlreadyExists(payload.name));
        }
        if let Some(head_id) = payload.head_id {
            self.employee_name(head_id)?;
        }

        let department = Department::new(payload)?;
        self.audit.record(
            actor,
            AuditAction::Create,
            "Department",
            Some(department.id.to_string()),
            format!("Created department {}", department.name),
        );
        self.departments.push(department.clone());
        Ok(department)
    }

    pub fn update_department(
        &mut self,
        actor: &Actor,
        id: Uuid,
        update: DepartmentUpdate,
    ) -> Result<Department, DomainError> {
        if let Some(name) = &update.name {
            let taken = self
                .departments
                .iter()
                .any(|d| d.id != id && d.name.eq_ignore_ascii_case(name.trim()));
            if taken {
                return Err(DomainError::DepartmentNameAlreadyExists(name.clone()));
            }
        }
        if let Some(head_id) = update.head_id {
            self.employee_name(head_id)?;
        }

        let department = self
            .departments
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(DomainError::DepartmentNotFound(id))?;
        department.apply(update)?;
        let updated = department.clone();

        self.audit.record(
            actor,
            AuditAction::Update,
            "Department",
            Some(id.to_string()),
            format!("Updated department {}", updated.name),
        );
        Ok(updated)
    }

    pub fn delete_department(&mut self, actor: &Actor, id: Uuid) -> Result<(), DomainError> {
        let index = self
            .departments
            .iter()
            .position(|d| d.id == id)
            .ok_or(DomainError::DepartmentNotFound(id))?;
        let removed = self.departments.remove(index);

        self.audit.record(
            actor,
            AuditAction::Delete,
            "Department",
            Some(id.to_string()),
            format!("Deleted department {}", removed.name),
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Leave requests
    // ------------------------------------------------------------------

    pub fn add_leave_request(
        &mut self,
        actor: &Actor,
        payload: NewLeaveRequest,
    ) -> Result<LeaveRequest, DomainError> {
        let employee_name = self.employee_name(payload.employee_id)?;
        let request = LeaveRequest::new(payload, employee_name, today())?;

        self.audit.record(
            actor,
            AuditAction::Create,
            "Leave Request",
            Some(request.id.to_string()),
            format!("Created {} leave request for {}", request.leave_type.as_str(), request.employee_name),
        );
        self.leave_requests.push(request.clone());
        Ok(request)
    }

    pub fn update_leave_request(
        &mut self,
        actor: &Actor,
        id: Uuid,
        update: LeaveRequestUpdate,
    ) -> Result<LeaveRequest, DomainError> {
        let request = self
            .leave_requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::LeaveRequestNotFound(id))?;
        request.apply(update, today())?;
        let updated = request.clone();

        self.audit.record(
            actor,
            AuditAction::Update,
            "Leave Request",
            Some(id.to_string()),
            format!("Updated leave request ({})", updated.status.as_str()),
        );
        Ok(updated)
    }

    // ------------------------------------------------------------------
    // Attendance
    // ------------------------------------------------------------------

    pub fn add_attendance_record(
        &mut self,
        actor: &Actor,
        payload: NewAttendanceRecord,
    ) -> Result<AttendanceRecord, DomainError> {
        let employee_name = self.employee_name(payload.employee_id)?;

        let duplicate = self
            .attendance_records
            .iter()
            .any(|r| r.employee_id == payload.employee_id && r.date == payload.date);
        if duplicate {
            return Err(DomainError::AttendanceAlreadyRecorded {
                employee_id: payload.employee_id,
                date: payload.date,
            });
        }

        let record = AttendanceRecord::new(payload, employee_name);
        self.audit.record(
            actor,
            AuditAction::Create,
            "Attendance Record",
            Some(record.id.to_string()),
            format!("Recorded attendance for {} on {}", record.employee_name, record.date),
        );
        self.attendance_records.push(record.clone());
        Ok(record)
    }

    pub fn update_attendance_record(
        &mut self,
        actor: &Actor,
        id: Uuid,
        update: AttendanceUpdate,
    ) -> Result<AttendanceRecord, DomainError> {
        let record = self
            .attendance_records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::AttendanceRecordNotFound(id))?;
        record.apply(update);
        let updated = record.clone();

        self.audit.record(
            actor,
            AuditAction::Update,
            "Attendance Record",
            Some(id.to_string()),
            format!("Updated attendance for {}", updated.employee_name),
        );
        Ok(updated)
    }

    // ------------------------------------------------------------------
    // Performance reviews
    // ------------------------------------------------------------------

    pub fn add_performance_review(
        &mut self,
        actor: &Actor,
        payload: NewPerformanceReview,
    ) -> Result<PerformanceReview, DomainError> {
        let employee_name = self.employee_name(payload.employee_id)?;
        let reviewer_name = self.employee_name(payload.reviewer_id)?;
        let review = PerformanceReview::new(payload, employee_name, reviewer_name, today());

        self.audit.record(
            actor,
            AuditAction::Create,
            "Performance Review",
            Some(review.id.to_string()),
            format!("Created performance review for {}", review.employee_name),
        );
        self.performance_reviews.push(review.clone());
        Ok(review)
    }

    pub fn update_performance_review(
        &mut self,
        actor: &Actor,
        id: Uuid,
        update: ReviewUpdate,
    ) -> Result<PerformanceReview, DomainError> {
        let review = self
            .performance_reviews
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::ReviewNotFound(id))?;
        review.apply(update, today())?;
        let updated = review.clone();

        self.audit.record(
            actor,
            AuditAction::Update,
            "Performance Review",
            Some(id.to_string()),
            "Updated performance review",
        );
        Ok(updated)
    }

    // ------------------------------------------------------------------
    // Onboarding / offboarding workflows
    // ------------------------------------------------------------------

    pub fn add_onboarding_workflow(
        &mut self,
        actor: &Actor,
        payload: NewOnboardingWorkflow,
    ) -> Result<OnboardingWorkflow, DomainError> {
        let employee_name = self.employee_name(payload.employee_id)?;
        let workflow = OnboardingWorkflow::new(payload, employee_name);

        self.audit.record(
            actor,
            AuditAction::Create,
            "Onboarding Workflow",
            Some(workflow.id.to_string()),
            format!("Created onboarding workflow for {}", workflow.employee_name),
        );
        self.onboarding_workflows.push(workflow.clone());
        Ok(workflow)
    }

    pub fn update_onboarding_workflow(
        &mut self,
        actor: &Actor,
        id: Uuid,
        update: WorkflowUpdate,
    ) -> Result<OnboardingWorkflow, DomainError> {
        let workflow = self
            .onboarding_workflows
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(DomainError::WorkflowNotFound(id))?;
        workflow.apply(update)?;
        let updated = workflow.clone();

        self.audit.record(
            actor,
            AuditAction::Update,
            "Onboarding Workflow",
            Some(id.to_string()),
            format!("Updated onboarding workflow for {}", updated.employee_name),
        );
        Ok(updated)
    }

    pub fn set_onboarding_task_status(
        &mut self,
        actor: &Actor,
        workflow_id: Uuid,
        task_id: Uuid,
        status: TaskStatus,
    ) -> Result<OnboardingWorkflow, DomainError> {
        let workflow = self
            .onboarding_workflows
            .iter_mut()
            .find(|w| w.id == workflow_id)
            .ok_or(DomainError::WorkflowNotFound(workflow_id))?;
        workflow.set_task_status(task_id, status, Some(actor.user_name.clone()), today())?;
        let updated = workflow.clone();

        self.audit.record(
            actor,
            AuditAction::Update,
            "Onboarding Workflow",
            Some(workflow_id.to_string()),
            format!("Task status change; progress now {}%", updated.progress),
        );
        Ok(updated)
    }

    pub fn add_offboarding_workflow(
        &mut self,
        actor: &Actor,
        payload: NewOffboardingWorkflow,
    ) -> Result<OffboardingWorkflow, DomainError> {
        let employee_name = self.employee_name(payload.employee_id)?;
        let workflow = OffboardingWorkflow::new(payload, employee_name);

        self.audit.record(
            actor,
            AuditAction::Create,
            "Offboarding Workflow",
            Some(workflow.id.to_string()),
            format!("Created offboarding workflow for {}", workflow.employee_name),
        );
        self.offboarding_workflows.push(workflow.clone());
        Ok(workflow)
    }

    pub fn update_offboarding_workflow(
        &mut self,
        actor: &Actor,
        id: Uuid,
        update: WorkflowUpdate,
    ) -> Result<OffboardingWorkflow, DomainError> {
        let workflow = self
            .offboarding_workflows
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(DomainError::WorkflowNotFound(id))?;
        workflow.apply(update)?;
        let updated = workflow.clone();

        self.audit.record(
            actor,
            AuditAction::Update,
            "Offboarding Workflow",
            Some(id.to_string()),
            format!("Updated offboarding workflow for {}", updated.employee_name),
        );
        Ok(updated)
    }

    pub fn set_offboarding_task_status(
        &mut self,
        actor: &Actor,
        workflow_id: Uuid,
        task_id: Uuid,
        status: TaskStatus,
    ) -> Result<OffboardingWorkflow, DomainError> {
        let workflow = self
            .offboarding_workflows
            .iter_mut()
            .find(|w| w.id == workflow_id)
            .ok_or(DomainError::WorkflowNotFound(workflow_id))?;
        workflow.set_task_status(task_id, status, Some(actor.user_name.clone()), today())?;
        let updated = workflow.clone();

        self.audit.record(
            actor,
            AuditAction::Update,
            "Offboarding Workflow",
            Some(workflow_id.to_string()),
            format!("Task status change; progress now {}%", updated.progress),
        );
        Ok(updated)
    }

    // ------------------------------------------------------------------
    // Shifts
    // ------------------------------------------------------------------

    pub fn add_shift(&mut self, actor: &Actor, payload: NewShift) -> Result<Shift, DomainError> {
        let employee_name = self.employee_name(payload.employee_id)?;
        let shift = Shift::new(payload, employee_name, actor.user_name.clone(), today())?;

        self.audit.record(
            actor,
            AuditAction::Create,
            "Shift",
            Some(shift.id.to_string()),
            format!("Created shift for {} on {}", shift.employee_name, shift.date),
        );
        self.shifts.push(shift.clone());
        Ok(shift)
    }

    pub fn update_shift(
        &mut self,
        actor: &Actor,
        id: Uuid,
        update: ShiftUpdate,
    ) -> Result<Shift, DomainError> {
        let shift = self
            .shifts
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(DomainError::ShiftNotFound(id))?;
        shift.apply(update)?;
        let updated = shift.clone();

        self.audit.record(
            actor,
            AuditAction::Update,
            "Shift",
            Some(id.to_string()),
            format!("Updated shift ({})", updated.status.as_str()),
        );
        Ok(updated)
    }

    pub fn delete_shift(&mut self, actor: &Actor, id: Uuid) -> Result<(), DomainError> {
        let index = self
            .shifts
            .iter()
            .position(|s| s.id == id)
            .ok_or(DomainError::ShiftNotFound(id))?;
        self.shifts.remove(index);

        self.audit.record(
            actor,
            AuditAction::Delete,
            "Shift",
            Some(id.to_string()),
            "Deleted shift",
        );
        Ok(())
    }

    pub fn add_shift_template(
        &mut self,
        actor: &Actor,
        payload: NewShiftTemplate,
    ) -> Result<ShiftTemplate, DomainError> {
        let template = ShiftTemplate::new(payload)?;
        self.audit.record(
            actor,
            AuditAction::Create,
            "Shift Template",
            Some(template.id.to_string()),
            format!("Created shift template {}", template.name),
        );
        self.shift_templates.push(template.clone());
        Ok(template)
    }

    // ------------------------------------------------------------------
    // Surveys
    // ------------------------------------------------------------------

    pub fn add_survey(&mut self, actor: &Actor, payload: NewSurvey) -> Result<Survey, DomainError> {
        let survey = Survey::new(payload, actor.user_name.clone(), today());

        self.audit.record(
            actor,
            AuditAction::Create,
            "Survey",
            Some(survey.id.to_string()),
            format!("Created survey: {}", survey.title),
        );
        self.surveys.push(survey.clone());
        Ok(survey)
    }

    pub fn update_survey(
        &mut self,
        actor: &Actor,
        id: Uuid,
        update: SurveyUpdate,
    ) -> Result<Survey, DomainError> {
        let survey = self
            .surveys
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(DomainError::SurveyNotFound(id))?;
        survey.apply(update)?;
        let updated = survey.clone();

        self.audit.record(
            actor,
            AuditAction::Update,
            "Survey",
            Some(id.to_string()),
            format!("Updated survey: {}", updated.title),
        );
        Ok(updated)
    }

    /// Survey responses are deliberately not audited; the trail would
    /// defeat anonymous surveys.
    pub fn submit_survey_response(
        &mut self,
        survey_id: Uuid,
        payload: NewSurveyResponse,
    ) -> Result<SurveyResponse, DomainError> {
        let survey = self
            .surveys
            .iter_mut()
            .find(|s| s.id == survey_id)
            .ok_or(DomainError::SurveyNotFound(survey_id))?;
        survey.submit_response(payload, today())
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    pub fn export_data(
        &mut self,
        actor: &Actor,
        kind: ExportKind,
        format: ExportFormat,
    ) -> Result<ExportDocument, DomainError> {
        let body = match kind {
            ExportKind::Employees => export::render_employees(&self.employees),
            ExportKind::Leave => export::render_leave(&self.leave_requests),
            ExportKind::Attendance => export::render_attendance(&self.attendance_records),
        };

        self.audit.record(
            actor,
            AuditAction::Export,
            format!("{} Data", kind.as_str()),
            None,
            format!(
                "Exported {} data in {} format",
                kind.as_str(),
                format.as_str().to_uppercase()
            ),
        );

        Ok(export::document(kind, format, body))
    }
}
