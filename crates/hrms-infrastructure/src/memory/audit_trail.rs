// ============================================================================
// HRMS Infrastructure - Audit Trail
// File: crates/hrms-infrastructure/src/memory/audit_trail.rs
// ============================================================================
//! Append-only, size-bounded audit log

use chrono::Utc;
use uuid::Uuid;

use hrms_core::domain::{AuditAction, AuditFilter, AuditLog};
use hrms_shared::constants::AUDIT_LOG_CAPACITY;
use hrms_shared::Actor;

/// Newest-first audit trail, truncated to the most recent
/// [`AUDIT_LOG_CAPACITY`] entries. Recording never fails.
#[derive(Debug, Default)]
pub struct AuditTrail {
    entries: Vec<AuditLog>,
}

impl AuditTrail {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn record(
        &mut self,
        actor: &Actor,
        action: AuditAction,
        resource: impl Into<String>,
        resource_id: Option<String>,
        details: impl Into<String>,
    ) -> &AuditLog {
        let entry = AuditLog {
            id: Uuid::new_v4(),
            user_id: actor.user_id.clone(),
            user_name: actor.user_name.clone(),
            action,
            resource: resource.into(),
            resource_id,
            details: details.into(),
            timestamp: Utc::now(),
            ip_address: None,
            user_agent: None,
        };

        self.entries.insert(0, entry);
        self.entries.truncate(AUDIT_LOG_CAPACITY);
        &self.entries[0]
    }

    /// Full trail, newest first.
    pub fn entries(&self) -> &[AuditLog] {
        &self.entries
    }

    pub fn query(&self, filter: &AuditFilter) -> Vec<&AuditLog> {
        self.entries.iter().filter(|e| e.matches(filter)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_is_bounded_to_capacity() {
        let mut trail = AuditTrail::new();
        let actor = Actor::system();

        for i in 0..(AUDIT_LOG_CAPACITY + 1) {
            trail.record(&actor, AuditAction::Create, "Employee", None, format!("entry {i}"));
        }

        assert_eq!(trail.len(), AUDIT_LOG_CAPACITY);
        // newest kept at the front, the very first entry dropped
        assert_eq!(trail.entries()[0].details, format!("entry {}", AUDIT_LOG_CAPACITY));
        assert!(trail.entries().iter().all(|e| e.details != "entry 0"));
    }

    #[test]
    fn test_query_by_action() {
        let mut trail = AuditTrail::new();
        let actor = Actor::new("u1", "Sarah HR");
        trail.record(&actor, AuditAction::Create, "Shift", None, "Created shift");
        trail.record(&actor, AuditAction::Export, "employees Data", None, "Exported employees");

        let filter = AuditFilter { action: Some(AuditAction::Export), ..Default::default() };
        let hits = trail.query(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].resource, "employees Data");
    }
}
