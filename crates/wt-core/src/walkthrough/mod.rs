//! Walkthrough domain module.
//!
//! This module defines the onboarding walkthrough engine: the step
//! progression state machine, the target measurement registry, and the
//! tooltip/spotlight placement calculator.

pub mod defaults;
pub mod model;
pub mod placement;
pub mod registry;
pub mod state_machine;

pub use defaults::StaticStepCatalog;
pub use model::{
    HapticFeedback, OnboardingState, TargetMeasurement, TourState, UserRole, WalkthroughStep,
};
pub use placement::{
    spotlight_rect, tooltip_position, tooltip_width, SafeAreaInsets, ScreenMetrics, SpotlightRect,
    TooltipPlacement, TooltipPosition,
};
pub use registry::TargetRegistry;
pub use state_machine::{WalkthroughAction, WalkthroughEvent, WalkthroughStateMachine};
