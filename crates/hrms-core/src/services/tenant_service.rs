// ============================================================================
// HRMS Core - Tenant Service
// File: crates/hrms-core/src/services/tenant_service.rs
// ============================================================================
//! Tenant resolution, lookup, and settings management

use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{NewTenant, Tenant, TenantUpdate};
use crate::error::DomainError;
use crate::repositories::TenantRepository;

/// Resolves an inbound host to a tenant and manages tenant records.
pub struct TenantService<R: TenantRepository> {
    tenant_repo: Arc<R>,
    /// Applied when host resolution fails, so callers never run
    /// without a tenant context.
    default_domain: String,
}

impl<R: TenantRepository> TenantService<R> {
    pub fn new(tenant_repo: Arc<R>, default_domain: String) -> Self {
        Self { tenant_repo, default_domain }
    }

    /// Resolves a host to a tenant: exact domain match first, then the
    /// first dot-separated label of the host against subdomains.
    pub async fn resolve(&self, host: &str) -> Result<Tenant, DomainError> {
        let host = host.trim().to_lowercase();

        if let Some(tenant) = self.tenant_repo.find_by_domain(&host).await? {
            return Ok(tenant);
        }

        if let Some(label) = host.split('.').next() {
            if let Some(tenant) = self.tenant_repo.find_by_subdomain(label).await? {
                return Ok(tenant);
            }
        }

        warn!("No tenant matched host: {}", host);
        Err(DomainError::TenantNotFound)
    }

    /// Like [`resolve`](Self::resolve), but falls back to the
    /// configured default tenant instead of failing.
    pub async fn resolve_or_default(&self, host: &str) -> Result<Tenant, DomainError> {
        match self.resolve(host).await {
            Ok(tenant) => Ok(tenant),
            Err(DomainError::TenantNotFound) => {
                info!("Falling back to default tenant: {}", self.default_domain);
                self.tenant_repo
                    .find_by_domain(&self.default_domain)
                    .await?
                    .ok_or(DomainError::TenantNotFound)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn get_by_id(&self, id: &Uuid) -> Result<Tenant, DomainError> {
        self.tenant_repo.find_by_id(id).await?.ok_or(DomainError::TenantNotFound)
    }

    pub async fn create(&self, payload: NewTenant) -> Result<Tenant, DomainError> {
        if self.tenant_repo.find_by_domain(&payload.domain.to_lowercase()).await?.is_some() {
            return Err(DomainError::TenantDomainAlreadyExists(payload.domain));
        }
        if self.tenant_repo.find_by_subdomain(&payload.subdomain.to_lowercase()).await?.is_some() {
            return Err(DomainError::TenantSubdomainAlreadyExists(payload.subdomain));
        }

        let tenant = Tenant::new(payload)?;
        let created = self.tenant_repo.create(&tenant).await?;
        info!("Created tenant {} ({})", created.name, created.domain);
        Ok(created)
    }

    pub async fn update(&self, id: &Uuid, update: TenantUpdate) -> Result<Tenant, DomainError> {
        let mut tenant = self.get_by_id(id).await?;
        tenant.apply(update)?;
        self.tenant_repo.update(&tenant).await
    }

    /// Union of baseline, subscription, and settings-enabled features.
    pub async fn feature_set(&self, id: &Uuid) -> Result<BTreeSet<String>, DomainError> {
        Ok(self.get_by_id(id).await?.feature_set())
    }
}
