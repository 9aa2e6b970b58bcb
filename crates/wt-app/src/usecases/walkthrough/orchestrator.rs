//! Walkthrough orchestrator.
//!
//! This module coordinates the pure walkthrough state machine and its side
//! effects: every UI action becomes an event, the reducer computes the next
//! state, subscribers are notified, and only then are the emitted actions
//! executed. Persistence writes are fired without blocking further
//! interaction; a storage failure never rolls back the in-memory state.
//!
//! No method here returns an error — the engine fails open. In the worst
//! case the tour renders without a spotlight or forgets that it was seen;
//! it never crashes the host app.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, info, info_span, Instrument};

use wt_core::ports::{HapticsPort, KeyValueStorePort, StepCatalogPort};
use wt_core::{
    OnboardingState, TargetMeasurement, TargetRegistry, TourState, UserRole, WalkthroughAction,
    WalkthroughEvent, WalkthroughStateMachine, WalkthroughStep,
};

use super::context::WalkthroughContext;
use super::gateway::OnboardingGateway;

/// Orchestrator that drives walkthrough state and side effects.
///
/// The injectable facade handed to the UI layer: an observable state
/// container plus the action surface, the target registry host, and the
/// derived step reads.
pub struct WalkthroughOrchestrator {
    context: Arc<WalkthroughContext>,
    targets: Mutex<TargetRegistry>,

    gateway: Arc<OnboardingGateway>,
    catalog: Arc<dyn StepCatalogPort>,
    haptics: Arc<dyn HapticsPort>,

    hydrated: AtomicBool,
}

impl WalkthroughOrchestrator {
    pub fn new(
        store: Arc<dyn KeyValueStorePort>,
        catalog: Arc<dyn StepCatalogPort>,
        haptics: Arc<dyn HapticsPort>,
    ) -> Self {
        Self {
            context: WalkthroughContext::default().arc(),
            targets: Mutex::new(TargetRegistry::new()),
            gateway: Arc::new(OnboardingGateway::new(store)),
            catalog,
            haptics,
            hydrated: AtomicBool::new(false),
        }
    }

    /// Create an orchestrator from cloned `Arc<dyn Port>` references.
    pub fn from_ports(
        store: Arc<dyn KeyValueStorePort>,
        catalog: Arc<dyn StepCatalogPort>,
        haptics: Arc<dyn HapticsPort>,
    ) -> Self {
        Self::new(store, catalog, haptics)
    }

    /// Load the persisted snapshot into memory. Runs once; later calls are
    /// no-ops. `state()` self-seeds, so calling this explicitly is only
    /// needed to warm up before the first render.
    pub async fn hydrate(&self) {
        if self.hydrated.swap(true, Ordering::SeqCst) {
            return;
        }

        let persisted = self.gateway.load_all().await;
        self.dispatch(WalkthroughEvent::Hydrated {
            user_role: persisted.user_role,
            has_seen_customer_guide: persisted.has_seen_customer_guide,
            has_seen_mechanic_guide: persisted.has_seen_mechanic_guide,
        })
        .await;
    }

    /// Current state snapshot, seeded from storage on first use.
    pub async fn state(&self) -> OnboardingState {
        self.hydrate().await;
        self.context.get_state()
    }

    /// Subscribe to state changes. The receiver immediately holds the
    /// current snapshot and is notified on every committed transition.
    pub fn subscribe(&self) -> watch::Receiver<OnboardingState> {
        self.context.subscribe()
    }

    pub async fn set_user_role(&self, role: UserRole) {
        self.dispatch(WalkthroughEvent::SetUserRole { role }).await;
    }

    /// Start the tour for `role`. Any tour already in progress is discarded.
    pub async fn start_walkthrough(&self, role: UserRole) {
        // The reducer stays pure: the step count is captured here, at the
        // catalog boundary, and travels with the event.
        let step_count = self.catalog.step_count(role);
        self.dispatch(WalkthroughEvent::Start { role, step_count })
            .await;
    }

    /// Advance one step; completes (and persists the seen flag) past the
    /// last step.
    pub async fn next_step(&self) {
        self.dispatch(WalkthroughEvent::NextStep).await;
    }

    pub async fn prev_step(&self) {
        self.dispatch(WalkthroughEvent::PrevStep).await;
    }

    /// User-intent dismissal: counts as seen.
    pub async fn skip_walkthrough(&self) {
        self.dispatch(WalkthroughEvent::Skip).await;
    }

    /// Teardown without user intent (e.g. sign-out): the seen flag is left
    /// alone so the tour can be offered again.
    pub async fn stop_walkthrough(&self) {
        self.dispatch(WalkthroughEvent::Stop).await;
    }

    /// Clear persisted and in-memory onboarding state.
    pub async fn reset_onboarding(&self) {
        self.dispatch(WalkthroughEvent::Reset).await;
    }

    /// Record a target's measurement. Invalid measurements (zero or negative
    /// dimensions from a transient layout pass) are discarded here so they
    /// can never overwrite a valid entry in the registry.
    pub async fn register_target(&self, id: impl Into<String>, measurement: TargetMeasurement) {
        let id = id.into();
        if !measurement.is_valid() {
            debug!(target_id = %id, ?measurement, "discarding invalid target measurement");
            return;
        }
        self.targets.lock().await.register(id, measurement);
    }

    pub async fn unregister_target(&self, id: &str) {
        self.targets.lock().await.unregister(id);
    }

    /// Last known measurement for a target, or `None` — including the
    /// normal mid-navigation gap where the owning screen has unmounted and
    /// the next one has not registered yet.
    pub async fn target_measurement(&self, id: &str) -> Option<TargetMeasurement> {
        self.targets.lock().await.measurement(id)
    }

    /// The step the tour currently points at, `None` while idle.
    pub fn current_step(&self) -> Option<WalkthroughStep> {
        match self.context.get_state().tour {
            TourState::Active {
                role, step_index, ..
            } => self.catalog.steps(role).get(step_index).cloned(),
            TourState::Idle => None,
        }
    }

    /// Step count of the running tour, 0 while idle.
    pub fn total_steps(&self) -> usize {
        match self.context.get_state().tour {
            TourState::Active { role, .. } => self.catalog.step_count(role),
            TourState::Idle => 0,
        }
    }

    async fn dispatch(&self, event: WalkthroughEvent) {
        // Serialize concurrent dispatch calls so the machine stays the
        // single logical writer.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.walkthrough_orchestrator.dispatch", event = ?event);
        async {
            let current = self.context.get_state();
            let event_name = format!("{:?}", event);
            let (next, actions) = WalkthroughStateMachine::transition(current.clone(), event);
            info!(from = ?current.tour, to = ?next.tour, event = %event_name, "walkthrough state transition");

            // Commit and notify before any effect runs: the in-memory
            // transition is authoritative, persistence is best-effort.
            self.context.set_state(next);
            self.execute_actions(actions).await;
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<WalkthroughAction>) {
        for action in actions {
            debug!(?action, "walkthrough executing action");
            match action {
                WalkthroughAction::PersistUserRole { role } => {
                    let gateway = Arc::clone(&self.gateway);
                    tokio::spawn(async move {
                        gateway.set_user_role(role).await;
                    });
                }
                WalkthroughAction::PersistGuideSeen { role } => {
                    let gateway = Arc::clone(&self.gateway);
                    tokio::spawn(async move {
                        gateway.set_has_seen_guide(role, true).await;
                    });
                }
                WalkthroughAction::ClearPersisted => {
                    let gateway = Arc::clone(&self.gateway);
                    tokio::spawn(async move {
                        gateway.reset_all().await;
                    });
                }
                WalkthroughAction::Haptic { feedback } => {
                    self.haptics.trigger(feedback).await;
                }
            }
        }
    }
}
