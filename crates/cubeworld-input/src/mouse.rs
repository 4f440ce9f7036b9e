//! Pointer drag tracking and wheel conversion.

use glam::Vec2;
use winit::event::MouseScrollDelta;

/// Drag state: whether a drag is active and the last pointer position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    dragging: bool,
    last: Vec2,
}

impl DragState {
    /// Start a drag at `position`.
    pub fn begin(&mut self, position: Vec2) {
        self.dragging = true;
        self.last = position;
    }

    /// Move to `position`, returning the delta since the last recorded
    /// position. Returns `None` when not dragging.
    pub fn advance(&mut self, position: Vec2) -> Option<Vec2> {
        if !self.dragging {
            return None;
        }
        let delta = position - self.last;
        self.last = position;
        Some(delta)
    }

    /// Record the pointer position without dragging, so a later
    /// [`DragState::begin`] can start from it.
    pub fn track(&mut self, position: Vec2) {
        if !self.dragging {
            self.last = position;
        }
    }

    /// Stop dragging. The last position is kept.
    pub fn end(&mut self) {
        self.dragging = false;
    }

    /// Returns `true` while a drag is active.
    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Last recorded pointer position.
    #[inline]
    #[must_use]
    pub const fn last_position(&self) -> Vec2 {
        self.last
    }
}

/// Convert a winit scroll delta to a vertical wheel delta in pixels.
///
/// The result follows the DOM convention: positive means scrolling down,
/// which zooms out. Line deltas count `line_height` pixels per line.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn wheel_delta_pixels(delta: MouseScrollDelta, line_height: f32) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * line_height,
        MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
    }
}
