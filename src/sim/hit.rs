//! Click hit-testing
//!
//! Clicks arrive in device pixels relative to the page. They are mapped into
//! the [-1, 1]² space the targets live in, then tested against every active
//! target.

use glam::Vec2;

use super::state::TargetField;

/// Bounding box of the canvas element, in the same pixel space as the click
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    /// Left/top corner (includes any padding offset on the page)
    pub origin: Vec2,
    /// Client width/height of the canvas
    pub size: Vec2,
}

impl CanvasRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    /// Map a client-space pixel to normalized coordinates
    ///
    /// Canvas Y grows downward while the field's Y grows upward, so the
    /// vertical axis is flipped. A degenerate rect maps everything to the
    /// origin.
    pub fn to_normalized(&self, client: Vec2) -> Vec2 {
        if self.size.x <= 0.0 || self.size.y <= 0.0 {
            return Vec2::ZERO;
        }
        let local = client - self.origin;
        let flipped_y = self.size.y - local.y;
        Vec2::new(
            2.0 * local.x / self.size.x - 1.0,
            2.0 * flipped_y / self.size.y - 1.0,
        )
    }
}

/// Deactivate every active target containing `point`
///
/// There is no early exit, so a click on overlapping targets takes all of them
/// at once. Returns the number of targets hit. Each call counts as one click
/// when the field is scored.
pub fn hit_test(field: &mut TargetField, point: Vec2) -> usize {
    let mut hits = 0;
    for (index, target) in field.targets.iter_mut().enumerate() {
        if target.active && target.contains(point) {
            target.active = false;
            hits += 1;
            log::debug!("Hit target {} at ({:.3}, {:.3})", index, point.x, point.y);
        }
    }
    field.targets_remaining = field.targets_remaining.saturating_sub(hits);

    if field.features.scoring {
        field.click_count = field.click_count.saturating_add(1);
    }
    hits
}
