//! Repository traits (ports)

pub mod tenant_repository;

pub use tenant_repository::TenantRepository;
