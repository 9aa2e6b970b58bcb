//! Haptic feedback port
//!
//! Fire-and-forget: implementations must return promptly and swallow their
//! own failures — a missed haptic is never worth interrupting the tour.

use async_trait::async_trait;

use crate::walkthrough::HapticFeedback;

#[async_trait]
pub trait HapticsPort: Send + Sync {
    async fn trigger(&self, feedback: HapticFeedback);
}
