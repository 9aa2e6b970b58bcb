//! Walkthrough domain models
//!
//! This module defines the core domain models for the onboarding walkthrough,
//! which guides a user through an ordered set of UI highlights, one persona
//! ("role") at a time.

/// Persona determining which ordered step list applies.
///
/// 用户角色：决定使用哪一组引导步骤。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Mechanic,
}

impl UserRole {
    /// Stable string form used as the persisted representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Mechanic => "mechanic",
        }
    }

    /// Parse the persisted string form. Unknown values are `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "customer" => Some(UserRole::Customer),
            "mechanic" => Some(UserRole::Mechanic),
            _ => None,
        }
    }
}

/// One entry in a role's ordered walkthrough sequence.
///
/// Read-only configuration data; the engine never mutates steps.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WalkthroughStep {
    /// Stable step identifier.
    pub id: String,
    /// Key into the target registry.
    pub target_id: String,
    /// Tooltip title.
    pub title: String,
    /// Tooltip body text.
    pub body: String,
    /// Optional route hint for cross-screen targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
}

/// Last known on-screen rectangle of a walkthrough target.
///
/// A value snapshot, replaced wholesale on each re-measurement — never a
/// reference to the UI element that produced it.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TargetMeasurement {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
    /// Absolute screen x of the left edge.
    pub page_x: f32,
    /// Absolute screen y of the top edge.
    pub page_y: f32,
}

impl TargetMeasurement {
    pub fn new(width: f32, height: f32, page_x: f32, page_y: f32) -> Self {
        Self {
            width,
            height,
            page_x,
            page_y,
        }
    }

    /// A measurement is usable only with positive dimensions. Transient
    /// zero-size layout passes must be discarded before registration.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Haptic cue fired alongside a walkthrough transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HapticFeedback {
    /// Light tap on step navigation.
    ImpactLight,
    /// Medium tap when a tour starts.
    ImpactMedium,
    /// Success notification on natural completion.
    NotifySuccess,
}

/// Transient tour progression state.
///
/// 引导进行状态：空闲或在某一角色的第 `step_index` 步。
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TourState {
    /// No tour is running.
    Idle,
    /// A tour is running. `step_index < step_count` always holds.
    Active {
        role: UserRole,
        step_index: usize,
        step_count: usize,
    },
}

/// Full onboarding state: persisted cache fields plus the transient tour.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OnboardingState {
    /// Persisted role choice, if any.
    pub user_role: Option<UserRole>,
    /// Whether the customer tour has been completed or skipped.
    pub has_seen_customer_guide: bool,
    /// Whether the mechanic tour has been completed or skipped.
    pub has_seen_mechanic_guide: bool,
    /// Current tour progression.
    pub tour: TourState,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            user_role: None,
            has_seen_customer_guide: false,
            has_seen_mechanic_guide: false,
            tour: TourState::Idle,
        }
    }
}

impl OnboardingState {
    pub fn is_walkthrough_active(&self) -> bool {
        matches!(self.tour, TourState::Active { .. })
    }

    /// Role of the tour currently running, independent of `user_role`.
    pub fn current_role(&self) -> Option<UserRole> {
        match self.tour {
            TourState::Active { role, .. } => Some(role),
            TourState::Idle => None,
        }
    }

    /// Current 0-based step index; 0 while idle.
    pub fn current_step_index(&self) -> usize {
        match self.tour {
            TourState::Active { step_index, .. } => step_index,
            TourState::Idle => 0,
        }
    }

    pub fn has_seen_guide(&self, role: UserRole) -> bool {
        match role {
            UserRole::Customer => self.has_seen_customer_guide,
            UserRole::Mechanic => self.has_seen_mechanic_guide,
        }
    }

    pub(crate) fn mark_guide_seen(&mut self, role: UserRole) {
        match role {
            UserRole::Customer => self.has_seen_customer_guide = true,
            UserRole::Mechanic => self.has_seen_mechanic_guide = true,
        }
    }
}
