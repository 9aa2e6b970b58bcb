//! Walkthrough state machine.
//!
//! Defines a pure state transition function for the onboarding walkthrough.
//! Transitions never perform I/O; persistence and haptics come out as
//! [`WalkthroughAction`] values for the application layer to execute after
//! the in-memory transition has been committed.

use super::model::{HapticFeedback, OnboardingState, TourState, UserRole};

/// Events that drive the walkthrough.
///
/// 驱动引导流程的事件。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WalkthroughEvent {
    /// Persisted snapshot loaded at startup.
    ///
    /// 启动时加载的持久化快照。
    Hydrated {
        user_role: Option<UserRole>,
        has_seen_customer_guide: bool,
        has_seen_mechanic_guide: bool,
    },
    /// User picked (or switched) their role.
    ///
    /// 用户选择角色。
    SetUserRole { role: UserRole },
    /// Start the tour for a role. `step_count` is captured from the step
    /// catalog at dispatch time.
    ///
    /// 开始某一角色的引导。
    Start { role: UserRole, step_count: usize },
    /// Advance to the next step (or complete on the last one).
    ///
    /// 前进一步。
    NextStep,
    /// Go back one step.
    ///
    /// 后退一步。
    PrevStep,
    /// User dismissed the tour; counts as seen.
    ///
    /// 用户跳过引导（视为已看过）。
    Skip,
    /// Tear the tour down without counting it as seen.
    ///
    /// 终止引导（不视为已看过）。
    Stop,
    /// Clear all onboarding state, persisted and transient.
    ///
    /// 重置全部引导状态。
    Reset,
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WalkthroughAction {
    /// Persist the chosen role.
    PersistUserRole { role: UserRole },
    /// Persist the per-role seen flag as true.
    PersistGuideSeen { role: UserRole },
    /// Remove all persisted onboarding keys.
    ClearPersisted,
    /// Fire a haptic cue.
    Haptic { feedback: HapticFeedback },
}

/// Pure walkthrough state machine.
///
/// 纯状态机：不包含副作用。
pub struct WalkthroughStateMachine;

impl WalkthroughStateMachine {
    pub fn transition(
        mut state: OnboardingState,
        event: WalkthroughEvent,
    ) -> (OnboardingState, Vec<WalkthroughAction>) {
        match event {
            WalkthroughEvent::Hydrated {
                user_role,
                has_seen_customer_guide,
                has_seen_mechanic_guide,
            } => {
                // A role chosen or a tour completed before the startup read
                // lands must not be clobbered by the stale snapshot.
                state.user_role = state.user_role.or(user_role);
                state.has_seen_customer_guide |= has_seen_customer_guide;
                state.has_seen_mechanic_guide |= has_seen_mechanic_guide;
                (state, Vec::new())
            }
            WalkthroughEvent::SetUserRole { role } => {
                state.user_role = Some(role);
                (state, vec![WalkthroughAction::PersistUserRole { role }])
            }
            WalkthroughEvent::Start { role, step_count } => {
                if step_count == 0 {
                    // Nothing to show; an unseen tour stays unseen.
                    return (state, Vec::new());
                }
                // Starting a new tour always wins over any tour in progress.
                state.tour = TourState::Active {
                    role,
                    step_index: 0,
                    step_count,
                };
                (
                    state,
                    vec![WalkthroughAction::Haptic {
                        feedback: HapticFeedback::ImpactMedium,
                    }],
                )
            }
            WalkthroughEvent::NextStep => match state.tour {
                TourState::Active {
                    role,
                    step_index,
                    step_count,
                } => {
                    let next = step_index + 1;
                    if next >= step_count {
                        state.tour = TourState::Idle;
                        state.mark_guide_seen(role);
                        (
                            state,
                            vec![
                                WalkthroughAction::PersistGuideSeen { role },
                                WalkthroughAction::Haptic {
                                    feedback: HapticFeedback::NotifySuccess,
                                },
                            ],
                        )
                    } else {
                        state.tour = TourState::Active {
                            role,
                            step_index: next,
                            step_count,
                        };
                        (
                            state,
                            vec![WalkthroughAction::Haptic {
                                feedback: HapticFeedback::ImpactLight,
                            }],
                        )
                    }
                }
                TourState::Idle => (state, Vec::new()),
            },
            WalkthroughEvent::PrevStep => match state.tour {
                TourState::Active {
                    role,
                    step_index,
                    step_count,
                } if step_index > 0 => {
                    state.tour = TourState::Active {
                        role,
                        step_index: step_index - 1,
                        step_count,
                    };
                    (
                        state,
                        vec![WalkthroughAction::Haptic {
                            feedback: HapticFeedback::ImpactLight,
                        }],
                    )
                }
                _ => (state, Vec::new()),
            },
            WalkthroughEvent::Skip => match state.tour {
                TourState::Active { role, .. } => {
                    state.tour = TourState::Idle;
                    state.mark_guide_seen(role);
                    (state, vec![WalkthroughAction::PersistGuideSeen { role }])
                }
                TourState::Idle => (state, Vec::new()),
            },
            WalkthroughEvent::Stop => {
                // Teardown unrelated to user intent (e.g. sign-out): the tour
                // may legitimately be offered again, so nothing is persisted.
                state.tour = TourState::Idle;
                (state, Vec::new())
            }
            WalkthroughEvent::Reset => {
                (OnboardingState::default(), vec![WalkthroughAction::ClearPersisted])
            }
        }
    }
}
