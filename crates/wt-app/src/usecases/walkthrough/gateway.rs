//! Onboarding persistence gateway.
//!
//! A failure-swallowing facade over the durable key/value store. Reads
//! substitute the safe default (`None` role, `false` seen) and writes are
//! logged and dropped on failure — the in-memory state has already moved
//! on, and onboarding durability is never worth blocking or breaking the
//! app. The gateway API is therefore infallible.

use std::sync::Arc;

use tracing::warn;
use wt_core::ports::KeyValueStorePort;
use wt_core::UserRole;

pub const KEY_USER_ROLE: &str = "walkthrough.user_role";
pub const KEY_HAS_SEEN_CUSTOMER_GUIDE: &str = "walkthrough.has_seen_customer_guide";
pub const KEY_HAS_SEEN_MECHANIC_GUIDE: &str = "walkthrough.has_seen_mechanic_guide";

/// Persisted onboarding snapshot, loaded in one batched read at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PersistedOnboarding {
    pub user_role: Option<UserRole>,
    pub has_seen_customer_guide: bool,
    pub has_seen_mechanic_guide: bool,
}

pub struct OnboardingGateway {
    store: Arc<dyn KeyValueStorePort>,
}

impl OnboardingGateway {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    fn seen_key(role: UserRole) -> &'static str {
        match role {
            UserRole::Customer => KEY_HAS_SEEN_CUSTOMER_GUIDE,
            UserRole::Mechanic => KEY_HAS_SEEN_MECHANIC_GUIDE,
        }
    }

    /// Persisted role choice, `None` on absence or read failure.
    pub async fn user_role(&self) -> Option<UserRole> {
        match self.store.get(KEY_USER_ROLE).await {
            Ok(value) => value.as_deref().and_then(UserRole::parse),
            Err(err) => {
                warn!(error = %err, "failed to read user role from storage");
                None
            }
        }
    }

    pub async fn set_user_role(&self, role: UserRole) {
        if let Err(err) = self.store.set(KEY_USER_ROLE, role.as_str()).await {
            warn!(error = %err, role = role.as_str(), "failed to save user role to storage");
        }
    }

    /// Per-role seen flag, `false` on absence or read failure.
    pub async fn has_seen_guide(&self, role: UserRole) -> bool {
        match self.store.get(Self::seen_key(role)).await {
            Ok(value) => value.as_deref() == Some("true"),
            Err(err) => {
                warn!(error = %err, role = role.as_str(), "failed to read guide seen flag from storage");
                false
            }
        }
    }

    pub async fn set_has_seen_guide(&self, role: UserRole, seen: bool) {
        let value = if seen { "true" } else { "false" };
        if let Err(err) = self.store.set(Self::seen_key(role), value).await {
            warn!(error = %err, role = role.as_str(), "failed to save guide seen flag to storage");
        }
    }

    /// Single batched read of role and both seen flags, used at startup to
    /// avoid sequential round trips.
    pub async fn load_all(&self) -> PersistedOnboarding {
        let keys = [
            KEY_USER_ROLE,
            KEY_HAS_SEEN_CUSTOMER_GUIDE,
            KEY_HAS_SEEN_MECHANIC_GUIDE,
        ];
        match self.store.multi_get(&keys).await {
            Ok(values) => {
                let value = |i: usize| values.get(i).and_then(|v| v.as_deref());
                PersistedOnboarding {
                    user_role: value(0).and_then(UserRole::parse),
                    has_seen_customer_guide: value(1) == Some("true"),
                    has_seen_mechanic_guide: value(2) == Some("true"),
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to load onboarding state from storage");
                PersistedOnboarding::default()
            }
        }
    }

    /// Remove all onboarding keys. Maintenance/testing operation.
    pub async fn reset_all(&self) {
        let keys = [
            KEY_USER_ROLE,
            KEY_HAS_SEEN_CUSTOMER_GUIDE,
            KEY_HAS_SEEN_MECHANIC_GUIDE,
        ];
        if let Err(err) = self.store.multi_remove(&keys).await {
            warn!(error = %err, "failed to reset onboarding storage");
        }
    }
}
