use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use wt_core::OnboardingState;

/// Shared walkthrough context containing state and dispatch lock.
///
/// The state lives inside a `watch` channel: reads are lock-free snapshots,
/// writes notify every subscriber. This is the subscribe/notify container
/// consumed by the overlay presenter in place of a UI-framework context.
///
/// ## Lock Ordering
/// `dispatch_lock` is acquired only for `dispatch` operations, to serialize
/// the whole transition + notify + execute-actions sequence. Reads
/// (`get_state`, `subscribe`) never take it.
#[derive(Clone)]
pub struct WalkthroughContext {
    /// Current onboarding state; the channel retains the latest snapshot.
    state: Arc<watch::Sender<OnboardingState>>,
    /// Serializes dispatch calls to prevent concurrent state/action races.
    dispatch_lock: Arc<Mutex<()>>,
}

impl WalkthroughContext {
    /// Creates a new context with the given initial state.
    pub fn new(initial_state: OnboardingState) -> Self {
        let (tx, _rx) = watch::channel(initial_state);
        Self {
            state: Arc::new(tx),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Snapshot of the current state.
    pub fn get_state(&self) -> OnboardingState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes. The receiver immediately holds the
    /// current snapshot and is notified on every committed transition.
    pub fn subscribe(&self) -> watch::Receiver<OnboardingState> {
        self.state.subscribe()
    }

    /// Acquires the dispatch lock for serializing concurrent dispatch calls.
    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Commits a new state and notifies subscribers.
    ///
    /// This should only be called after acquiring `dispatch_lock`.
    pub fn set_state(&self, state: OnboardingState) {
        self.state.send_replace(state);
    }
}

impl Default for WalkthroughContext {
    fn default() -> Self {
        Self::new(OnboardingState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wt_core::{TourState, UserRole};

    #[tokio::test]
    async fn set_state_notifies_subscribers_with_the_new_snapshot() {
        let context = WalkthroughContext::default();
        let mut rx = context.subscribe();

        let mut next = OnboardingState::default();
        next.tour = TourState::Active {
            role: UserRole::Customer,
            step_index: 0,
            step_count: 5,
        };
        context.set_state(next.clone());

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().clone(), next);
        assert_eq!(context.get_state(), next);
    }

    #[tokio::test]
    async fn subscribe_sees_current_state_without_a_change() {
        let context = WalkthroughContext::default();
        let rx = context.subscribe();
        assert_eq!(rx.borrow().clone(), OnboardingState::default());
    }
}
