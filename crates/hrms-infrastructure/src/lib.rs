//! # HRMS Infrastructure
//!
//! In-memory store, tenant directory, and external calendar adapter.

pub mod google;
pub mod memory;

pub use google::GoogleCalendarClient;
pub use memory::{
    AuditTrail, ExportDocument, ExportFormat, ExportKind, HrStore, InMemoryTenantRepository,
};
