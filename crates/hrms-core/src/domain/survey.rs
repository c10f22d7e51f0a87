// ============================================================================
// HRMS Core - Survey Entity
// File: crates/hrms-core/src/domain/survey.rs
// Description: Surveys with anonymous-response handling
// ============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyStatus {
    Draft,
    Active,
    Closed,
}

impl SurveyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SurveyStatus::Draft => "draft",
            SurveyStatus::Active => "active",
            SurveyStatus::Closed => "closed",
        }
    }

    pub fn can_transition_to(&self, next: SurveyStatus) -> bool {
        matches!(
            (self, next),
            (SurveyStatus::Draft, SurveyStatus::Active)
                | (SurveyStatus::Active, SurveyStatus::Closed)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurveyQuestionKind {
    Text,
    Rating,
    MultipleChoice,
    YesNo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyQuestion {
    pub id: Uuid,
    pub kind: SurveyQuestionKind,
    pub question: String,
    pub required: bool,
    pub options: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub id: Uuid,
    pub survey_id: Uuid,
    pub employee_id: Uuid,

    /// Absent for responses to anonymous surveys.
    pub employee_name: Option<String>,

    pub answers: HashMap<Uuid, serde_json::Value>,
    pub submitted_date: NaiveDate,
    pub is_anonymous: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetAudience {
    All,
    Department,
    Role,
}

/// Survey entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survey {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub created_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SurveyStatus,
    pub is_anonymous: bool,
    pub questions: Vec<SurveyQuestion>,
    pub responses: Vec<SurveyResponse>,
    pub target_audience: TargetAudience,
    pub target_value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSurvey {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub is_anonymous: bool,
    pub questions: Vec<SurveyQuestion>,
    pub target_audience: TargetAudience,
    pub target_value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<SurveyStatus>,
    pub questions: Option<Vec<SurveyQuestion>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSurveyResponse {
    pub employee_id: Uuid,
    pub employee_name: Option<String>,
    pub answers: HashMap<Uuid, serde_json::Value>,
}

impl Survey {
    pub fn new(payload: NewSurvey, created_by: String, today: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: payload.title,
            description: payload.description,
            created_by,
            created_date: today,
            end_date: payload.end_date,
            status: SurveyStatus::Draft,
            is_anonymous: payload.is_anonymous,
            questions: payload.questions,
            responses: Vec::new(),
            target_audience: payload.target_audience,
            target_value: payload.target_value,
        }
    }

    pub fn apply(&mut self, update: SurveyUpdate) -> Result<(), DomainError> {
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
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(end_date) = update.end_date {
            self.end_date = end_date;
        }
        if let Some(questions) = update.questions {
            self.questions = questions;
        }
        Ok(())
    }

    /// Records a response. Anonymous surveys never retain the
    /// respondent's name, regardless of what the payload carried.
    pub fn submit_response(
        &mut self,
        payload: NewSurveyResponse,
        today: NaiveDate,
    ) -> Result<SurveyResponse, DomainError> {
        if self.status != SurveyStatus::Active {
            return Err(DomainError::SurveyNotActive(self.status.as_str().to_string()));
        }

        let employee_name = if self.is_anonymous { None } else { payload.employee_name };

        let response = SurveyResponse {
            id: Uuid::new_v4(),
            survey_id: self.id,
            employee_id: payload.employee_id,
            employee_name,
            answers: payload.answers,
            submitted_date: today,
            is_anonymous: self.is_anonymous,
        };
        self.responses.push(response.clone());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn survey(anonymous: bool) -> Survey {
        let mut s = Survey::new(
            NewSurvey {
                title: "Engagement 2024".to_string(),
                description: String::new(),
                end_date: d("2024-03-01"),
                is_anonymous: anonymous,
                questions: vec![],
                target_audience: TargetAudience::All,
                target_value: None,
            },
            "Sarah HR".to_string(),
            d("2024-02-01"),
        );
        s.apply(SurveyUpdate { status: Some(SurveyStatus::Active), ..Default::default() }).unwrap();
        s
    }

    #[test]
    fn test_anonymous_survey_strips_employee_name() {
        let mut s = survey(true);
        let response = s
            .submit_response(
                NewSurveyResponse {
                    employee_id: Uuid::new_v4(),
                    employee_name: Some("Mike Johnson".to_string()),
                    answers: HashMap::new(),
                },
                d("2024-02-10"),
            )
            .unwrap();
        assert_eq!(response.employee_name, None);
        assert!(response.is_anonymous);
    }

    #[test]
    fn test_named_survey_keeps_employee_name() {
        let mut s = survey(false);
        let response = s
            .submit_response(
                NewSurveyResponse {
                    employee_id: Uuid::new_v4(),
                    employee_name: Some("Mike Johnson".to_string()),
                    answers: HashMap::new(),
                },
                d("2024-02-10"),
            )
            .unwrap();
        assert_eq!(response.employee_name.as_deref(), Some("Mike Johnson"));
    }

    #[test]
    fn test_draft_survey_rejects_responses() {
        let mut s = survey(false);
        s.status = SurveyStatus::Draft;
        let err = s
            .submit_response(
                NewSurveyResponse {
                    employee_id: Uuid::new_v4(),
                    employee_name: None,
                    answers: HashMap::new(),
                },
                d("2024-02-10"),
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::SurveyNotActive(_)));
    }

    #[test]
    fn test_closed_is_terminal() {
        let mut s = survey(false);
        s.apply(SurveyUpdate { status: Some(SurveyStatus::Closed), ..Default::default() }).unwrap();
        let err = s
            .apply(SurveyUpdate { status: Some(SurveyStatus::Active), ..Default::default() })
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidStatusTransition { .. }));
    }
}
