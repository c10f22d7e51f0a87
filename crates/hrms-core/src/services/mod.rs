//! Domain services (business logic)

pub mod calendar_sync;
pub mod policy;
pub mod tenant_service;

pub use calendar_sync::{CalendarPort, CalendarSyncService};
pub use tenant_service::TenantService;
