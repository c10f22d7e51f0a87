// ============================================================================
// HRMS Infrastructure - In-Memory Tenant Repository
// File: crates/hrms-infrastructure/src/memory/tenant_repo.rs
// ============================================================================
//! Tenant directory backed by a `RwLock<Vec<Tenant>>`

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use hrms_core::domain::{
    ApprovalWorkflow, FeatureFlags, NewTenant, SubscriptionPlan, Tenant, TenantSettings,
    TenantSubscription, WorkingHours,
};
use hrms_core::error::DomainError;
use hrms_core::repositories::TenantRepository;

#[derive(Debug, Default)]
pub struct InMemoryTenantRepository {
    tenants: RwLock<Vec<Tenant>>,
}

impl InMemoryTenantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory pre-populated with the two demo tenants.
    pub fn seeded() -> Result<Self, DomainError> {
        let repo = Self::new();
        {
            let mut tenants = repo.write()?;
            tenants.push(Tenant::new(techcorp())?);
            tenants.push(Tenant::new(startupxyz())?);
        }
        Ok(repo)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Tenant>>, DomainError> {
        self.tenants
            .read()
            .map_err(|_| DomainError::InternalError("tenant directory lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Tenant>>, DomainError> {
        self.tenants
            .write()
            .map_err(|_| DomainError::InternalError("tenant directory lock poisoned".to_string()))
    }
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Tenant>, DomainError> {
        Ok(self.read()?.iter().find(|t| t.id == *id).cloned())
    }

    async fn find_by_domain(&self, domain: &str) -> Result<Option<Tenant>, DomainError> {
        let domain = domain.to_lowercase();
        Ok(self.read()?.iter().find(|t| t.domain == domain).cloned())
    }

    async fn find_by_subdomain(&self, subdomain: &str) -> Result<Option<Tenant>, DomainError> {
        let subdomain = subdomain.to_lowercase();
        Ok(self.read()?.iter().find(|t| t.subdomain == subdomain).cloned())
    }

    async fn list(&self) -> Result<Vec<Tenant>, DomainError> {
        Ok(self.read()?.clone())
    }

    async fn create(&self, tenant: &Tenant) -> Result<Tenant, DomainError> {
        let mut tenants = self.write()?;
        tenants.push(tenant.clone());
        Ok(tenant.clone())
    }

    async fn update(&self, tenant: &Tenant) -> Result<Tenant, DomainError> {
        let mut tenants = self.write()?;
        let existing = tenants
            .iter_mut()
            .find(|t| t.id == tenant.id)
            .ok_or(DomainError::TenantNotFound)?;
        *existing = tenant.clone();
        Ok(tenant.clone())
    }
}

fn techcorp() -> NewTenant {
    NewTenant {
        name: "TechCorp Solutions".to_string(),
        domain: "techcorp.com".to_string(),
        subdomain: "techcorp".to_string(),
        logo: None,
        primary_color: "#3B82F6".to_string(),
        secondary_color: "#10B981".to_string(),
        settings: TenantSettings {
            allow_google_calendar: true,
            default_timezone: "America/New_York".to_string(),
            working_hours: WorkingHours { start: "09:00".to_string(), end: "17:00".to_string() },
            working_days: vec![1, 2, 3, 4, 5],
            leave_approval_workflow: ApprovalWorkflow::Manager,
            features: FeatureFlags {
                surveys: true,
                performance: true,
                onboarding: true,
                shifts: true,
                ai_tools: true,
            },
        },
        subscription: TenantSubscription {
            plan: SubscriptionPlan::Enterprise,
            max_employees: 1000,
            features: vec!["all".to_string()],
            expires_at: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default(),
        },
    }
}

fn startupxyz() -> NewTenant {
    NewTenant {
        name: "StartupXYZ".to_string(),
        domain: "startupxyz.com".to_string(),
        subdomain: "startupxyz".to_string(),
        logo: None,
        primary_color: "#8B5CF6".to_string(),
        secondary_color: "#F59E0B".to_string(),
        settings: TenantSettings {
            allow_google_calendar: true,
            default_timezone: "America/Los_Angeles".to_string(),
            working_hours: WorkingHours { start: "10:00".to_string(), end: "18:00".to_string() },
            working_days: vec![1, 2, 3, 4, 5],
            leave_approval_workflow: ApprovalWorkflow::Hr,
            features: FeatureFlags {
                surveys: true,
                performance: false,
                onboarding: true,
                shifts: false,
                ai_tools: false,
            },
        },
        subscription: TenantSubscription {
            plan: SubscriptionPlan::Professional,
            max_employees: 100,
            features: vec!["basic".to_string(), "surveys".to_string(), "onboarding".to_string()],
            expires_at: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
        },
    }
}
