//! Application-wide constants

/// Audit trail is truncated to this many most-recent entries.
pub const AUDIT_LOG_CAPACITY: usize = 1000;

/// Features every tenant gets regardless of plan.
pub const BASELINE_FEATURES: &[&str] = &["dashboard", "employees", "attendance", "leave"];

pub const SYSTEM_USER_ID: &str = "system";
pub const SYSTEM_USER_NAME: &str = "System";
