//! # wt-core
//!
//! Core domain models and business logic for WalkTour.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod ports;
pub mod walkthrough;

// Re-export commonly used types at the crate root
pub use walkthrough::{
    HapticFeedback, OnboardingState, TargetMeasurement, TargetRegistry, TourState, UserRole,
    WalkthroughAction, WalkthroughEvent, WalkthroughStateMachine, WalkthroughStep,
};
