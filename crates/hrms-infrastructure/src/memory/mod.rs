//! In-memory implementations (single-process, single-writer)

pub mod audit_trail;
pub mod export;
pub mod hr_store;
pub mod seed;
pub mod tenant_repo;

pub use audit_trail::AuditTrail;
pub use export::{ExportDocument, ExportFormat, ExportKind};
pub use hr_store::HrStore;
pub use tenant_repo::InMemoryTenantRepository;
