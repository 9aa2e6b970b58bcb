//! Step catalog port
//!
//! The step content (titles, bodies, target ids per role) is static
//! configuration supplied by the embedding application.

use crate::walkthrough::{UserRole, WalkthroughStep};

pub trait StepCatalogPort: Send + Sync {
    /// Ordered step list for the role. May be empty.
    fn steps(&self, role: UserRole) -> &[WalkthroughStep];

    /// Number of steps in the role's tour.
    fn step_count(&self, role: UserRole) -> usize {
        self.steps(role).len()
    }
}
