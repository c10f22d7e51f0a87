// ============================================================================
// HRMS Core - Tenant Entity
// File: crates/hrms-core/src/domain/tenant.rs
// Description: Tenant with branding, policy settings, and subscription
// ============================================================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainError;
use hrms_shared::constants::BASELINE_FEATURES;
use hrms_shared::utils::is_valid_hex_color;

/// Subscription plan enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    Starter,
    Professional,
    Enterprise,
}

impl SubscriptionPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionPlan::Starter => "starter",
            SubscriptionPlan::Professional => "professional",
            SubscriptionPlan::Enterprise => "enterprise",
        }
    }
}

impl Default for SubscriptionPlan {
    fn default() -> Self {
        SubscriptionPlan::Starter
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalWorkflow {
    Auto,
    Manager,
    Hr,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: String,
    pub end: String,
}

/// Per-tenant feature toggles
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub surveys: bool,
    pub performance: bool,
    pub onboarding: bool,
    pub shifts: bool,
    pub ai_tools: bool,
}

impl FeatureFlags {
    pub fn enabled_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.surveys {
            names.push("surveys");
        }
        if self.performance {
            names.push("performance");
        }
        if self.onboarding {
            names.push("onboarding");
        }
        if self.shifts {
            names.push("shifts");
        }
        if self.ai_tools {
            names.push("aiTools");
        }
        names
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantSettings {
    pub allow_google_calendar: bool,
    pub default_timezone: String,
    pub working_hours: WorkingHours,
    /// ISO weekday numbers, Monday = 1.
    pub working_days: Vec<u8>,
    pub leave_approval_workflow: ApprovalWorkflow,
    pub features: FeatureFlags,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantSubscription {
    pub plan: SubscriptionPlan,
    pub max_employees: i32,
    pub features: Vec<String>,
    pub expires_at: NaiveDate,
}

/// Tenant entity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Tenant {
    pub id: Uuid,

    #[validate(length(min = 2, max = 100, message = "Tenant name must be between 2 and 100 characters"))]
    pub name: String,

    /// Fully qualified domain, unique across tenants.
    #[validate(length(min = 3, max = 255))]
    pub domain: String,

    /// First host label used for subdomain resolution, unique across tenants.
    #[validate(length(min = 2, max = 63))]
    pub subdomain: String,

    pub logo: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub settings: TenantSettings,
    pub subscription: TenantSubscription,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTenant {
    pub name: String,
    pub domain: String,
    pub subdomain: String,
    pub logo: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub settings: TenantSettings,
    pub subscription: TenantSubscription,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TenantUpdate {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub settings: Option<TenantSettings>,
    pub subscription: Option<TenantSubscription>,
    pub is_active: Option<bool>,
}

impl Tenant {
    pub fn new(payload: NewTenant) -> Result<Self, DomainError> {
        for color in [&payload.primary_color, &payload.secondary_color] {
            if !is_valid_hex_color(color) {
                return Err(DomainError::ValidationError(format!("invalid hex color: {color}")));
            }
        }

        let tenant = Self {
            id: Uuid::new_v4(),
            name: payload.name.trim().to_string(),
            domain: payload.domain.trim().to_lowercase(),
            subdomain: payload.subdomain.trim().to_lowercase(),
            logo: payload.logo,
            primary_color: payload.primary_color,
            secondary_color: payload.secondary_color,
            settings: payload.settings,
            subscription: payload.subscription,
            created_at: Utc::now(),
            is_active: true,
        };

        tenant.validate()?;
        Ok(tenant)
    }

    pub fn apply(&mut self, update: TenantUpdate) -> Result<(), DomainError> {
        if let Some(primary) = &update.primary_color {
            if !is_valid_hex_color(primary) {
                return Err(DomainError::ValidationError(format!("invalid hex color: {primary}")));
            }
        }
        if let Some(secondary) = &update.secondary_color {
            if !is_valid_hex_color(secondary) {
                return Err(DomainError::ValidationError(format!(
                    "invalid hex color: {secondary}"
                )));
            }
        }

        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(logo) = update.logo {
            self.logo = Some(logo);
        }
        if let Some(primary_color) = update.primary_color {
            self.primary_color = primary_color;
        }
        if let Some(secondary_color) = update.secondary_color {
            self.secondary_color = secondary_color;
        }
        if let Some(settings) = update.settings {
            self.settings = settings;
        }
        if let Some(subscription) = update.subscription {
            self.subscription = subscription;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }

        self.validate()?;
        Ok(())
    }

    /// Union of baseline features, subscription-granted features, and
    /// settings-enabled feature flags. The store never checks these;
    /// enforcement happens at the API boundary.
    pub fn feature_set(&self) -> BTreeSet<String> {
        let mut features: BTreeSet<String> =
            BASELINE_FEATURES.iter().map(|f| f.to_string()).collect();
        features.extend(self.subscription.features.iter().cloned());
        features.extend(self.settings.features.enabled_names().into_iter().map(String::from));
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant() -> Tenant {
        Tenant::new(NewTenant {
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
                    shifts: false,
                    ai_tools: false,
                },
            },
            subscription: TenantSubscription {
                plan: SubscriptionPlan::Enterprise,
                max_employees: 1000,
                features: vec!["all".to_string()],
                expires_at: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            },
        })
        .unwrap()
    }

    #[test]
    fn test_feature_set_union() {
        let features = tenant().feature_set();
        // baseline
        assert!(features.contains("dashboard"));
        assert!(features.contains("leave"));
        // subscription-granted
        assert!(features.contains("all"));
        // settings-enabled flags
        assert!(features.contains("surveys"));
        assert!(!features.contains("shifts"));
        assert!(!features.contains("aiTools"));
    }

    #[test]
    fn test_invalid_color_rejected() {
        let mut t = tenant();
        let err = t
            .apply(TenantUpdate { primary_color: Some("blue".to_string()), ..Default::default() })
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }
}
