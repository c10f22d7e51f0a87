// ============================================================================
// HRMS Core - Performance Review Entity
// File: crates/hrms-core/src/domain/review.rs
// Description: Performance review with goals and competencies
// ============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainError;

/// Review status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewStatus {
    Draft,
    InProgress,
    Completed,
    Overdue,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Draft => "draft",
            ReviewStatus::InProgress => "in-progress",
            ReviewStatus::Completed => "completed",
            ReviewStatus::Overdue => "overdue",
        }
    }

    pub fn can_transition_to(&self, next: ReviewStatus) -> bool {
        matches!(
            (self, next),
            (ReviewStatus::Draft, ReviewStatus::InProgress)
                | (ReviewStatus::InProgress, ReviewStatus::Completed)
                | (ReviewStatus::InProgress, ReviewStatus::Overdue)
                | (ReviewStatus::Overdue, ReviewStatus::Completed)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    NotStarted,
    InProgress,
    Completed,
    Overdue,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Goal {
    pub id: Uuid,
    #[validate(length(min = 2, max = 200))]
    pub title: String,
    pub description: String,
    pub target_date: NaiveDate,
    pub status: GoalStatus,
    #[validate(range(min = 0, max = 100))]
    pub progress: i32,
    pub rating: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Competency {
    pub id: Uuid,
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    pub comments: Option<String>,
}

/// Performance review entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReview {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub reviewer_id: Uuid,
    pub reviewer_name: String,
    pub review_period: String,
    pub status: ReviewStatus,
    pub overall_rating: f64,
    pub goals: Vec<Goal>,
    pub competencies: Vec<Competency>,
    pub feedback: String,
    pub employee_feedback: Option<String>,
    pub created_date: NaiveDate,
    pub due_date: NaiveDate,
    pub completed_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPerformanceReview {
    pub employee_id: Uuid,
    pub reviewer_id: Uuid,
    pub review_period: String,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub competencies: Vec<Competency>,
    pub due_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewUpdate {
    pub status: Option<ReviewStatus>,
    pub overall_rating: Option<f64>,
    pub goals: Option<Vec<Goal>>,
    pub competencies: Option<Vec<Competency>>,
    pub feedback: Option<String>,
    pub employee_feedback: Option<String>,
}

impl PerformanceReview {
    pub fn new(
        payload: NewPerformanceReview,
        employee_name: String,
        reviewer_name: String,
        today: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id: payload.employee_id,
            employee_name,
            reviewer_id: payload.reviewer_id,
            reviewer_name,
            review_period: payload.review_period,
            status: ReviewStatus::Draft,
            overall_rating: 0.0,
            goals: payload.goals,
            competencies: payload.competencies,
            feedback: String::new(),
            employee_feedback: None,
            created_date: today,
            due_date: payload.due_date,
            completed_date: None,
        }
    }

    pub fn apply(&mut self, update: ReviewUpdate, today: NaiveDate) -> Result<(), DomainError> {
        if let Some(next) = update.status {
            if next != self.status {
                if !self.status.can_transition_to(next) {
                    return Err(DomainError::InvalidStatusTransition {
                        from: self.status.as_str().to_string(),
                        to: next.as_str().to_string(),
                    });
                }
                self.status = next;
                if next == ReviewStatus::Completed {
                    self.completed_date = Some(today);
                }
            }
        }
        if let Some(overall_rating) = update.overall_rating {
            self.overall_rating = overall_rating;
        }
        if let Some(goals) = update.goals {
            self.goals = goals;
        }
        if let Some(competencies) = update.competencies {
            self.competencies = competencies;
        }
        if let Some(feedback) = update.feedback {
            self.feedback = feedback;
        }
        if let Some(employee_feedback) = update.employee_feedback {
            self.employee_feedback = Some(employee_feedback);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn review() -> PerformanceReview {
        PerformanceReview::new(
            NewPerformanceReview {
                employee_id: Uuid::new_v4(),
                reviewer_id: Uuid::new_v4(),
                review_period: "2024-H1".to_string(),
                goals: vec![],
                competencies: vec![],
                due_date: d("2024-06-30"),
            },
            "Mike Johnson".to_string(),
            "Sarah HR".to_string(),
            d("2024-01-15"),
        )
    }

    #[test]
    fn test_review_starts_as_draft() {
        assert_eq!(review().status, ReviewStatus::Draft);
    }

    #[test]
    fn test_lifecycle() {
        let mut r = review();
        r.apply(
            ReviewUpdate { status: Some(ReviewStatus::InProgress), ..Default::default() },
            d("2024-02-01"),
        )
        .unwrap();
        r.apply(
            ReviewUpdate { status: Some(ReviewStatus::Completed), ..Default::default() },
            d("2024-06-01"),
        )
        .unwrap();
        assert_eq!(r.completed_date, Some(d("2024-06-01")));
    }

    #[test]
    fn test_draft_cannot_complete_directly() {
        let mut r = review();
        let err = r
            .apply(
                ReviewUpdate { status: Some(ReviewStatus::Completed), ..Default::default() },
                d("2024-02-01"),
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidStatusTransition { .. }));
    }
}
