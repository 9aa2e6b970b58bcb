//! No-op haptics adapter
//!
//! For platforms (and tests) without a haptics engine. Cues are logged at
//! debug level and dropped.

use async_trait::async_trait;
use tracing::debug;
use wt_core::ports::HapticsPort;
use wt_core::HapticFeedback;

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHaptics;

#[async_trait]
impl HapticsPort for NoopHaptics {
    async fn trigger(&self, feedback: HapticFeedback) {
        debug!(?feedback, "haptic cue dropped (noop adapter)");
    }
}
