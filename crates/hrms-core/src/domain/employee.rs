// ============================================================================
// HRMS Core - Employee Entity
// File: crates/hrms-core/src/domain/employee.rs
// Description: Employee record with employment status
// ============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Employment status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
        }
    }
}

impl Default for EmployeeStatus {
    fn default() -> Self {
        EmployeeStatus::Active
    }
}

/// Employee entity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Employee {
    pub id: Uuid,

    /// Human-facing badge number, e.g. "EMP001". Unique within the tenant.
    #[validate(length(min = 1, max = 32, message = "Employee id must be between 1 and 32 characters"))]
    pub employee_id: String,

    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    pub phone: String,

    /// Department name; must reference an existing department.
    pub department: String,

    #[validate(length(min = 2, max = 100, message = "Position must be between 2 and 100 characters"))]
    pub position: String,

    pub join_date: NaiveDate,

    #[validate(range(min = 0.0, message = "Salary must not be negative"))]
    pub salary: f64,

    pub status: EmployeeStatus,
    pub avatar: Option<String>,
    pub address: String,
    pub emergency_contact: String,
}

/// Payload for creating an employee (id is assigned by the store)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub join_date: NaiveDate,
    pub salary: f64,
    #[serde(default)]
    pub status: EmployeeStatus,
    pub avatar: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub emergency_contact: String,
}

/// Partial update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub salary: Option<f64>,
    pub status: Option<EmployeeStatus>,
    pub avatar: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
}

impl Employee {
    pub fn new(payload: NewEmployee) -> Result<Self, validator::ValidationErrors> {
        let employee = Self {
            id: Uuid::new_v4(),
            employee_id: payload.employee_id.trim().to_string(),
            name: payload.name.trim().to_string(),
            email: payload.email.trim().to_lowercase(),
            phone: payload.phone,
            department: payload.department,
            position: payload.position.trim().to_string(),
            join_date: payload.join_date,
            salary: payload.salary,
            status: payload.status,
            avatar: payload.avatar,
            address: payload.address,
            emergency_contact: payload.emergency_contact,
        };

        employee.validate()?;
        Ok(employee)
    }

    pub fn apply(&mut self, update: EmployeeUpdate) -> Result<(), validator::ValidationErrors> {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(email) = update.email {
            self.email = email.trim().to_lowercase();
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(department) = update.department {
            self.department = department;
        }
        if let Some(position) = update.position {
            self.position = position.trim().to_string();
        }
        if let Some(join_date) = update.join_date {
            self.join_date = join_date;
        }
        if let Some(salary) = update.salary {
            self.salary = salary;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(avatar) = update.avatar {
            self.avatar = Some(avatar);
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(emergency_contact) = update.emergency_contact {
            self.emergency_contact = emergency_contact;
        }

        self.validate()
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> NewEmployee {
        NewEmployee {
            employee_id: "EMP010".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@company.com".to_string(),
            phone: "+1-555-0100".to_string(),
            department: "Engineering".to_string(),
            position: "Developer".to_string(),
            join_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            salary: 70_000.0,
            status: EmployeeStatus::Active,
            avatar: None,
            address: String::new(),
            emergency_contact: String::new(),
        }
    }

    #[test]
    fn test_create_employee() {
        let employee = Employee::new(payload());
        assert!(employee.is_ok());
        assert!(employee.unwrap().is_active());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut p = payload();
        p.email = "not-an-email".to_string();
        assert!(Employee::new(p).is_err());
    }

    #[test]
    fn test_partial_update() {
        let mut employee = Employee::new(payload()).unwrap();
        employee
            .apply(EmployeeUpdate {
                status: Some(EmployeeStatus::Inactive),
                salary: Some(75_000.0),
                ..Default::default()
            })
            .unwrap();
        assert!(!employee.is_active());
        assert_eq!(employee.salary, 75_000.0);
        // untouched fields survive the merge
        assert_eq!(employee.name, "Jane Doe");
    }
}
