//! Tooltip and spotlight placement.
//!
//! Pure geometry: given a target measurement (or its absence), the tooltip
//! height, and the screen/inset values, compute where the tooltip goes and
//! which way its arrow points. Screen dimensions and safe-area insets are
//! plain value inputs — the providers stay outside this crate.

use super::model::TargetMeasurement;

/// Gap between the target rectangle and the tooltip edge.
pub const TOOLTIP_OFFSET: f32 = 16.0;
/// Minimum distance kept below the top inset in the clipped fallback.
pub const TOOLTIP_TOP_MARGIN: f32 = 20.0;
/// Widest the tooltip ever gets.
pub const TOOLTIP_MAX_WIDTH: f32 = 320.0;
/// Horizontal gutter on each side of the tooltip on narrow screens.
pub const TOOLTIP_SIDE_GUTTER: f32 = 24.0;
/// Spotlight expansion beyond the target on every side.
pub const SPOTLIGHT_PADDING: f32 = 8.0;
/// Spotlight corner rounding.
pub const SPOTLIGHT_CORNER_RADIUS: f32 = 12.0;

/// Which side of the target the tooltip sits on.
///
/// `Below` is also the arrow-less default when there is no target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipPlacement {
    Above,
    Below,
}

/// Computed vertical position for the tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPosition {
    /// Absolute y of the tooltip's top edge.
    pub top: f32,
    pub placement: TooltipPlacement,
}

/// Screen dimensions in pixels, as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    pub width: f32,
    pub height: f32,
}

/// Safe-area insets in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SafeAreaInsets {
    pub top: f32,
    pub bottom: f32,
}

/// Highlight rectangle drawn around the current target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotlightRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
}

/// Compute where the tooltip goes for the current step.
///
/// Prefers sitting below the target; flips above when the space below is
/// too small; with no room either way falls back to a clipped, centered
/// position that never leaves the screen. With no target at all the
/// tooltip is centered vertically.
pub fn tooltip_position(
    target: Option<&TargetMeasurement>,
    tooltip_height: f32,
    screen: ScreenMetrics,
    insets: SafeAreaInsets,
) -> TooltipPosition {
    let Some(target) = target else {
        return TooltipPosition {
            top: (screen.height - tooltip_height) / 2.0,
            placement: TooltipPlacement::Below,
        };
    };

    let space_above = target.page_y - insets.top - TOOLTIP_OFFSET;
    let space_below =
        screen.height - (target.page_y + target.height) - insets.bottom - TOOLTIP_OFFSET;

    if space_below >= tooltip_height {
        TooltipPosition {
            top: target.page_y + target.height + TOOLTIP_OFFSET,
            placement: TooltipPlacement::Below,
        }
    } else if space_above >= tooltip_height {
        TooltipPosition {
            top: target.page_y - tooltip_height - TOOLTIP_OFFSET,
            placement: TooltipPlacement::Above,
        }
    } else {
        TooltipPosition {
            top: (insets.top + TOOLTIP_TOP_MARGIN).max((screen.height - tooltip_height) / 2.0),
            placement: TooltipPlacement::Below,
        }
    }
}

/// Spotlight rectangle for a target: the measurement expanded by a fixed
/// padding on all sides, with a fixed corner radius. Unlike the tooltip,
/// this derivation has no conditional logic.
pub fn spotlight_rect(target: &TargetMeasurement) -> SpotlightRect {
    SpotlightRect {
        x: target.page_x - SPOTLIGHT_PADDING,
        y: target.page_y - SPOTLIGHT_PADDING,
        width: target.width + SPOTLIGHT_PADDING * 2.0,
        height: target.height + SPOTLIGHT_PADDING * 2.0,
        corner_radius: SPOTLIGHT_CORNER_RADIUS,
    }
}

/// Tooltip width for a given screen: capped, with a gutter on each side.
pub fn tooltip_width(screen: ScreenMetrics) -> f32 {
    (screen.width - TOOLTIP_SIDE_GUTTER * 2.0).min(TOOLTIP_MAX_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: ScreenMetrics = ScreenMetrics {
        width: 390.0,
        height: 800.0,
    };
    const INSETS: SafeAreaInsets = SafeAreaInsets {
        top: 40.0,
        bottom: 20.0,
    };

    #[test]
    fn target_near_bottom_places_tooltip_above() {
        // space below = 800 - 740 - 20 - 16 = 24 < 180
        // space above = 700 - 40 - 16 = 644 >= 180
        let target = TargetMeasurement::new(200.0, 40.0, 95.0, 700.0);
        let pos = tooltip_position(Some(&target), 180.0, SCREEN, INSETS);
        assert_eq!(pos.placement, TooltipPlacement::Above);
        assert_eq!(pos.top, 504.0);
    }

    #[test]
    fn target_near_top_places_tooltip_below() {
        let target = TargetMeasurement::new(200.0, 40.0, 95.0, 60.0);
        let pos = tooltip_position(Some(&target), 180.0, SCREEN, INSETS);
        assert_eq!(pos.placement, TooltipPlacement::Below);
        assert_eq!(pos.top, 60.0 + 40.0 + TOOLTIP_OFFSET);
    }

    #[test]
    fn missing_target_centers_vertically() {
        let pos = tooltip_position(None, 180.0, SCREEN, INSETS);
        assert_eq!(pos.placement, TooltipPlacement::Below);
        assert_eq!(pos.top, (800.0 - 180.0) / 2.0);
        assert!(pos.top >= 0.0);
        assert!(pos.top <= SCREEN.height - 180.0);
    }

    #[test]
    fn no_room_either_way_falls_back_to_clipped_center() {
        // A tall target in the middle of a short screen: neither side fits.
        let screen = ScreenMetrics {
            width: 390.0,
            height: 500.0,
        };
        let target = TargetMeasurement::new(300.0, 300.0, 45.0, 100.0);
        let pos = tooltip_position(Some(&target), 180.0, screen, INSETS);
        assert_eq!(pos.placement, TooltipPlacement::Below);
        assert_eq!(pos.top, (500.0f32 - 180.0) / 2.0);
    }

    #[test]
    fn clipped_fallback_respects_top_margin_on_tiny_screens() {
        // Centering would land above the inset; the margin wins.
        let screen = ScreenMetrics {
            width: 390.0,
            height: 240.0,
        };
        let target = TargetMeasurement::new(300.0, 120.0, 45.0, 60.0);
        let pos = tooltip_position(Some(&target), 220.0, screen, INSETS);
        assert_eq!(pos.top, INSETS.top + TOOLTIP_TOP_MARGIN);
        assert_eq!(pos.placement, TooltipPlacement::Below);
    }

    #[test]
    fn spotlight_expands_target_by_padding() {
        let target = TargetMeasurement::new(120.0, 44.0, 30.0, 500.0);
        let rect = spotlight_rect(&target);
        assert_eq!(rect.x, 22.0);
        assert_eq!(rect.y, 492.0);
        assert_eq!(rect.width, 136.0);
        assert_eq!(rect.height, 60.0);
        assert_eq!(rect.corner_radius, SPOTLIGHT_CORNER_RADIUS);
    }

    #[test]
    fn tooltip_width_caps_on_wide_screens_and_shrinks_on_narrow() {
        assert_eq!(
            tooltip_width(ScreenMetrics {
                width: 800.0,
                height: 600.0,
            }),
            TOOLTIP_MAX_WIDTH
        );
        assert_eq!(
            tooltip_width(ScreenMetrics {
                width: 320.0,
                height: 600.0,
            }),
            320.0 - TOOLTIP_SIDE_GUTTER * 2.0
        );
    }
}
