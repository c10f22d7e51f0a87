//! Department domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Department entity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Department {
    pub id: Uuid,

    /// Unique within the tenant; employees reference departments by name.
    #[validate(length(min = 2, max = 100, message = "Department name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description too long"))]
    pub description: String,

    /// Head of department; must reference an existing employee when set.
    pub head_id: Option<Uuid>,

    pub budget: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDepartment {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub head_id: Option<Uuid>,
    pub budget: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub head_id: Option<Uuid>,
    pub budget: Option<f64>,
}

impl Department {
    pub fn new(payload: NewDepartment) -> Result<Self, validator::ValidationErrors> {
        let department = Self {
            id: Uuid::new_v4(),
            name: payload.name.trim().to_string(),
            description: payload.description.trim().to_string(),
            head_id: payload.head_id,
            budget: payload.budget,
        };

        department.validate()?;
        Ok(department)
    }

    pub fn apply(&mut self, update: DepartmentUpdate) -> Result<(), validator::ValidationErrors> {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description.trim().to_string();
        }
        if let Some(head_id) = update.head_id {
            self.head_id = Some(head_id);
        }
        if let Some(budget) = update.budget {
            self.budget = Some(budget);
        }

        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_department() {
        let department = Department::new(NewDepartment {
            name: "Engineering".to_string(),
            description: "Software development".to_string(),
            head_id: None,
            budget: Some(500_000.0),
        });
        assert!(department.is_ok());
    }

    #[test]
    fn test_short_name_rejected() {
        let department = Department::new(NewDepartment {
            name: "E".to_string(),
            description: String::new(),
            head_id: None,
            budget: None,
        });
        assert!(department.is_err());
    }
}
