//! Target measurement registry.
//!
//! Maps a stable target id to the last known on-screen rectangle of the
//! element it names. The registry stores value snapshots only — relation
//! plus lookup, never ownership — so tearing down a UI element can never
//! leave a dangling handle here, only an absent or stale entry.
//!
//! Navigation between screens is not atomic: the outgoing screen's target
//! may unregister a frame before the incoming screen's matching target
//! registers. During that gap lookups return `None`; callers degrade
//! gracefully instead of erroring.

use std::collections::HashMap;

use super::model::TargetMeasurement;

/// In-memory map from target id to measurement snapshot.
#[derive(Debug, Default)]
pub struct TargetRegistry {
    targets: HashMap<String, TargetMeasurement>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a measurement; the last write for a given id wins.
    ///
    /// The registry performs no validation — invalid measurements are
    /// filtered at the measuring boundary before they get here.
    pub fn register(&mut self, id: impl Into<String>, measurement: TargetMeasurement) {
        self.targets.insert(id.into(), measurement);
    }

    /// Remove an entry. Removing an absent id is a no-op.
    pub fn unregister(&mut self, id: &str) {
        self.targets.remove(id);
    }

    /// Last known measurement for the id, or `None` if absent.
    pub fn measurement(&self, id: &str) -> Option<TargetMeasurement> {
        self.targets.get(id).copied()
    }

    /// Number of currently registered targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(width: f32) -> TargetMeasurement {
        TargetMeasurement::new(width, 44.0, 16.0, 500.0)
    }

    #[test]
    fn register_then_lookup_returns_exact_measurement() {
        let mut registry = TargetRegistry::new();
        let m = measurement(120.0);
        registry.register("customer-post-job-cta", m);
        assert_eq!(registry.measurement("customer-post-job-cta"), Some(m));
    }

    #[test]
    fn unregister_then_lookup_returns_none() {
        let mut registry = TargetRegistry::new();
        registry.register("customer-post-job-cta", measurement(120.0));
        registry.unregister("customer-post-job-cta");
        assert_eq!(registry.measurement("customer-post-job-cta"), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn lookup_of_unknown_id_returns_none() {
        let registry = TargetRegistry::new();
        assert_eq!(registry.measurement("never-registered"), None);
    }

    #[test]
    fn last_write_wins_for_the_same_id() {
        let mut registry = TargetRegistry::new();
        registry.register("mechanic-leads-list", measurement(100.0));
        registry.register("mechanic-leads-list", measurement(240.0));
        assert_eq!(
            registry.measurement("mechanic-leads-list").map(|m| m.width),
            Some(240.0)
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unregister_of_absent_id_is_a_no_op() {
        let mut registry = TargetRegistry::new();
        registry.register("a", measurement(10.0));
        registry.unregister("b");
        assert_eq!(registry.len(), 1);
    }
}
