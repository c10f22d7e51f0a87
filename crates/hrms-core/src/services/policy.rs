//! Tenant policy checks
//!
//! The store never consults feature flags; every gated operation goes
//! through these checks at the API boundary instead of scattering
//! gating logic across callers.

use crate::domain::Tenant;
use crate::error::DomainError;

/// Fails with `FeatureDisabled` unless the tenant's feature set
/// contains `feature` or the subscription grants `"all"`.
pub fn ensure_feature(tenant: &Tenant, feature: &str) -> Result<(), DomainError> {
    let features = tenant.feature_set();
    if features.contains("all") || features.contains(feature) {
        Ok(())
    } else {
        Err(DomainError::FeatureDisabled(feature.to_string()))
    }
}

/// Fails when hiring one more employee would exceed the subscription's
/// employee cap.
pub fn ensure_employee_capacity(tenant: &Tenant, active_count: usize) -> Result<(), DomainError> {
    let max = tenant.subscription.max_employees;
    if active_count as i64 >= max as i64 {
        return Err(DomainError::EmployeeLimitReached(max));
    }
    Ok(())
}

/// Calendar sync is opt-in per tenant; callers check this before any
/// sync attempt.
pub fn ensure_calendar_allowed(tenant: &Tenant) -> Result<(), DomainError> {
    if tenant.settings.allow_google_calendar {
        Ok(())
    } else {
        Err(DomainError::FeatureDisabled("calendar".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ApprovalWorkflow, FeatureFlags, NewTenant, SubscriptionPlan, TenantSettings,
        TenantSubscription, WorkingHours,
    };
    use chrono::NaiveDate;

    fn tenant(max_employees: i32, shifts: bool) -> Tenant {
        Tenant::new(NewTenant {
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
                    shifts,
                    ai_tools: false,
                },
            },
            subscription: TenantSubscription {
                plan: SubscriptionPlan::Professional,
                max_employees,
                features: vec!["basic".to_string(), "surveys".to_string()],
                expires_at: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            },
        })
        .unwrap()
    }

    #[test]
    fn test_disabled_feature_denied() {
        let t = tenant(100, false);
        assert!(ensure_feature(&t, "surveys").is_ok());
        assert!(matches!(ensure_feature(&t, "shifts"), Err(DomainError::FeatureDisabled(_))));
    }

    #[test]
    fn test_calendar_gate() {
        let t = tenant(100, false);
        assert!(ensure_calendar_allowed(&t).is_ok());

        let mut t = t;
        t.settings.allow_google_calendar = false;
        assert!(matches!(ensure_calendar_allowed(&t), Err(DomainError::FeatureDisabled(_))));
    }

    #[test]
    fn test_employee_cap() {
        let t = tenant(2, false);
        assert!(ensure_employee_capacity(&t, 1).is_ok());
        assert!(matches!(
            ensure_employee_capacity(&t, 2),
            Err(DomainError::EmployeeLimitReached(2))
        ));
    }
}
