//! Audit log domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audit action enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Export,
    Login,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "CREATE",
            AuditAction::Update => "UPDATE",
            AuditAction::Delete => "DELETE",
            AuditAction::Export => "EXPORT",
            AuditAction::Login => "LOGIN",
        }
    }
}

/// A single immutable audit entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: Uuid,
    pub user_id: String,
    pub user_name: String,
    pub action: AuditAction,
    pub resource: String,
    pub resource_id: Option<String>,
    pub details: String,
    pub timestamp: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Query parameters for reading the trail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditFilter {
    /// Case-insensitive substring over user name, action, resource, details.
    pub search: Option<String>,
    pub action: Option<AuditAction>,
    /// Substring match on the resource name.
    pub resource: Option<String>,
}

impl AuditLog {
    pub fn matches(&self, filter: &AuditFilter) -> bool {
        if let Some(action) = filter.action {
            if self.action != action {
                return false;
            }
        }
        if let Some(resource) = &filter.resource {
            if !self.resource.to_lowercase().contains(&resource.to_lowercase()) {
                return false;
            }
        }
        if let Some(search) = &filter.search {
            let needle = search.to_lowercase();
            let hit = self.user_name.to_lowercase().contains(&needle)
                || self.action.as_str().to_lowercase().contains(&needle)
                || self.resource.to_lowercase().contains(&needle)
                || self.details.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}
