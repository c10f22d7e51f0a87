//! HTTP handlers grouped by resource

pub mod attendance;
pub mod audit;
pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod exports;
pub mod health;
pub mod leave;
pub mod reviews;
pub mod shifts;
pub mod surveys;
pub mod tenants;
pub mod workflows;
