// ============================================================================
// HRMS Core - Onboarding / Offboarding Workflow Entities
// File: crates/hrms-core/src/domain/workflow.rs
// Description: Task-driven workflows with derived progress
// ============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskCategory {
    Documentation,
    Equipment,
    Training,
    Access,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Overdue,
}

/// A single workflow task. Shared by onboarding and offboarding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowTask {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    pub assigned_to: String,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub completed_date: Option<NaiveDate>,
    pub completed_by: Option<String>,
    pub notes: Option<String>,
}

/// Onboarding workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowStatus {
    NotStarted,
    InProgress,
    Completed,
    Delayed,
    /// Offboarding only: workflow has been opened but not yet worked.
    Initiated,
}

impl WorkflowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStatus::NotStarted => "not-started",
            WorkflowStatus::InProgress => "in-progress",
            WorkflowStatus::Completed => "completed",
            WorkflowStatus::Delayed => "delayed",
            WorkflowStatus::Initiated => "initiated",
        }
    }

    pub fn can_transition_to(&self, next: WorkflowStatus) -> bool {
        matches!(
            (self, next),
            (WorkflowStatus::NotStarted, WorkflowStatus::InProgress)
                | (WorkflowStatus::Initiated, WorkflowStatus::InProgress)
                | (WorkflowStatus::InProgress, WorkflowStatus::Completed)
                | (WorkflowStatus::InProgress, WorkflowStatus::Delayed)
                | (WorkflowStatus::Delayed, WorkflowStatus::InProgress)
                | (WorkflowStatus::Delayed, WorkflowStatus::Completed)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffboardingReason {
    Resignation,
    Termination,
    Retirement,
    Other,
}

/// Onboarding workflow entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingWorkflow {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub start_date: NaiveDate,
    pub expected_completion_date: NaiveDate,
    pub status: WorkflowStatus,

    /// Completed-task ratio, 0-100. Recomputed whenever a task changes.
    pub progress: i32,

    pub tasks: Vec<WorkflowTask>,
    pub assigned_hr: String,
    pub notes: Option<String>,
}

/// Offboarding workflow entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffboardingWorkflow {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub last_working_day: NaiveDate,
    pub reason: OffboardingReason,
    pub status: WorkflowStatus,
    pub progress: i32,
    pub tasks: Vec<WorkflowTask>,
    pub assigned_hr: String,
    pub exit_interview_completed: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOnboardingWorkflow {
    pub employee_id: Uuid,
    pub start_date: NaiveDate,
    pub expected_completion_date: NaiveDate,
    #[serde(default)]
    pub tasks: Vec<WorkflowTask>,
    pub assigned_hr: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOffboardingWorkflow {
    pub employee_id: Uuid,
    pub last_working_day: NaiveDate,
    pub reason: OffboardingReason,
    #[serde(default)]
    pub tasks: Vec<WorkflowTask>,
    pub assigned_hr: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowUpdate {
    pub status: Option<WorkflowStatus>,
    pub assigned_hr: Option<String>,
    pub notes: Option<String>,
    pub exit_interview_completed: Option<bool>,
}

/// Completed-task ratio as a whole percentage. Empty task lists count
/// as zero progress, not as done.
pub(crate) fn derive_progress(tasks: &[WorkflowTask]) -> i32 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks.iter().filter(|t| t.status == TaskStatus::Completed).count();
    ((completed * 100) / tasks.len()) as i32
}

fn set_task_status(
    tasks: &mut [WorkflowTask],
    task_id: Uuid,
    status: TaskStatus,
    completed_by: Option<String>,
    today: NaiveDate,
) -> Result<(), DomainError> {
    let task = tasks
        .iter_mut()
        .find(|t| t.id == task_id)
        .ok_or(DomainError::WorkflowTaskNotFound(task_id))?;
    task.status = status;
    if status == TaskStatus::Completed {
        task.completed_date = Some(today);
        task.completed_by = completed_by;
    } else {
        task.completed_date = None;
        task.completed_by = None;
    }
    Ok(())
}

impl OnboardingWorkflow {
    pub fn new(payload: NewOnboardingWorkflow, employee_name: String) -> Self {
        let progress = derive_progress(&payload.tasks);
        Self {
            id: Uuid::new_v4(),
            employee_id: payload.employee_id,
            employee_name,
            start_date: payload.start_date,
            expected_completion_date: payload.expected_completion_date,
            status: WorkflowStatus::NotStarted,
            progress,
            tasks: payload.tasks,
            assigned_hr: payload.assigned_hr,
            notes: payload.notes,
        }
    }

    pub fn apply(&mut self, update: WorkflowUpdate) -> Result<(), DomainError> {
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
        if let Some(assigned_hr) = update.assigned_hr {
            self.assigned_hr = assigned_hr;
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        Ok(())
    }

    pub fn set_task_status(
        &mut self,
        task_id: Uuid,
        status: TaskStatus,
        completed_by: Option<String>,
        today: NaiveDate,
    ) -> Result<(), DomainError> {
        set_task_status(&mut self.tasks, task_id, status, completed_by, today)?;
        self.progress = derive_progress(&self.tasks);
        Ok(())
    }
}

impl OffboardingWorkflow {
    pub fn new(payload: NewOffboardingWorkflow, employee_name: String) -> Self {
        let progress = derive_progress(&payload.tasks);
        Self {
            id: Uuid::new_v4(),
            employee_id: payload.employee_id,
            employee_name,
            last_working_day: payload.last_working_day,
            reason: payload.reason,
            status: WorkflowStatus::Initiated,
            progress,
            tasks: payload.tasks,
            assigned_hr: payload.assigned_hr,
            exit_interview_completed: false,
            notes: payload.notes,
        }
    }

    pub fn apply(&mut self, update: WorkflowUpdate) -> Result<(), DomainError> {
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
        if let Some(assigned_hr) = update.assigned_hr {
            self.assigned_hr = assigned_hr;
        }
        if let Some(exit_interview_completed) = update.exit_interview_completed {
            self.exit_interview_completed = exit_interview_completed;
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        Ok(())
    }

    pub fn set_task_status(
        &mut self,
        task_id: Uuid,
        status: TaskStatus,
        completed_by: Option<String>,
        today: NaiveDate,
    ) -> Result<(), DomainError> {
        set_task_status(&mut self.tasks, task_id, status, completed_by, today)?;
        self.progress = derive_progress(&self.tasks);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn task(title: &str) -> WorkflowTask {
        WorkflowTask {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            category: TaskCategory::Documentation,
            assigned_to: "Sarah HR".to_string(),
            due_date: d("2024-02-01"),
            status: TaskStatus::Pending,
            completed_date: None,
            completed_by: None,
            notes: None,
        }
    }

    fn onboarding(tasks: Vec<WorkflowTask>) -> OnboardingWorkflow {
        OnboardingWorkflow::new(
            NewOnboardingWorkflow {
                employee_id: Uuid::new_v4(),
                start_date: d("2024-01-15"),
                expected_completion_date: d("2024-02-15"),
                tasks,
                assigned_hr: "Sarah HR".to_string(),
                notes: None,
            },
            "Jane Doe".to_string(),
        )
    }

    #[test]
    fn test_progress_derives_from_task_completion() {
        let tasks = vec![task("Contract"), task("Laptop"), task("Badge"), task("Training")];
        let ids: Vec<Uuid> = tasks.iter().map(|t| t.id).collect();
        let mut wf = onboarding(tasks);
        assert_eq!(wf.progress, 0);

        wf.set_task_status(ids[0], TaskStatus::Completed, Some("Sarah HR".to_string()), d("2024-01-16"))
            .unwrap();
        assert_eq!(wf.progress, 25);

        wf.set_task_status(ids[1], TaskStatus::Completed, None, d("2024-01-17")).unwrap();
        assert_eq!(wf.progress, 50);

        // reopening a task walks progress back
        wf.set_task_status(ids[0], TaskStatus::InProgress, None, d("2024-01-18")).unwrap();
        assert_eq!(wf.progress, 25);
    }

    #[test]
    fn test_empty_workflow_has_zero_progress() {
        assert_eq!(onboarding(vec![]).progress, 0);
    }

    #[test]
    fn test_unknown_task_rejected() {
        let mut wf = onboarding(vec![task("Contract")]);
        let err = wf
            .set_task_status(Uuid::new_v4(), TaskStatus::Completed, None, d("2024-01-16"))
            .unwrap_err();
        assert!(matches!(err, DomainError::WorkflowTaskNotFound(_)));
    }

    #[test]
    fn test_status_transitions() {
        let mut wf = onboarding(vec![]);
        assert_eq!(wf.status, WorkflowStatus::NotStarted);
        wf.apply(WorkflowUpdate { status: Some(WorkflowStatus::InProgress), ..Default::default() })
            .unwrap();
        let err = wf
            .apply(WorkflowUpdate { status: Some(WorkflowStatus::NotStarted), ..Default::default() })
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidStatusTransition { .. }));
    }
}
