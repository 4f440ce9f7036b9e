//! Camera control tuning.

use serde::{Deserialize, Serialize};

/// Sensitivities and step sizes for [`CameraController`](crate::CameraController).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Degrees of spin per pixel of horizontal drag.
    pub drag_sensitivity_x: f32,
    /// Degrees of tilt per pixel of vertical drag.
    pub drag_sensitivity_y: f32,
    /// Zoom change per pixel of wheel delta.
    pub zoom_sensitivity: f32,
    /// Degrees per rotation key press.
    pub rotation_step: f32,
    /// Degrees per rotation key press with Shift held.
    pub rotation_step_large: f32,
    /// Zoom change per zoom key press.
    pub zoom_step: f32,
    /// Zoom change per zoom key press with Shift held.
    pub zoom_step_large: f32,
    /// Pixels per line for line-based wheel deltas.
    pub wheel_line_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity_x: 0.5,
            drag_sensitivity_y: 0.5,
            zoom_sensitivity: 0.001,
            rotation_step: 5.0,
            rotation_step_large: 15.0,
            zoom_step: 0.1,
            zoom_step_large: 0.5,
            wheel_line_height: 100.0,
        }
    }
}

impl CameraConfig {
    /// Set both drag sensitivities.
    #[must_use]
    pub const fn with_drag_sensitivity(mut self, x: f32, y: f32) -> Self {
        self.drag_sensitivity_x = x;
        self.drag_sensitivity_y = y;
        self
    }

    /// Set the wheel zoom sensitivity.
    #[must_use]
    pub const fn with_zoom_sensitivity(mut self, sensitivity: f32) -> Self {
        self.zoom_sensitivity = sensitivity;
        self
    }

    /// Set the rotation key steps.
    #[must_use]
    pub const fn with_rotation_steps(mut self, step: f32, large: f32) -> Self {
        self.rotation_step = step;
        self.rotation_step_large = large;
        self
    }

    /// Set the zoom key steps.
    #[must_use]
    pub const fn with_zoom_steps(mut self, step: f32, large: f32) -> Self {
        self.zoom_step = step;
        self.zoom_step_large = large;
        self
    }

    /// Set the pixels counted per wheel line.
    #[must_use]
    pub const fn with_wheel_line_height(mut self, pixels: f32) -> Self {
        self.wheel_line_height = pixels;
        self
    }

    /// Rotation step for the given Shift state.
    #[must_use]
    pub const fn rotation_step_for(&self, large: bool) -> f32 {
        if large {
            self.rotation_step_large
        } else {
            self.rotation_step
        }
    }

    /// Zoom step for the given Shift state.
    #[must_use]
    pub const fn zoom_step_for(&self, large: bool) -> f32 {
        if large {
            self.zoom_step_large
        } else {
            self.zoom_step
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_override_defaults() {
        let config = CameraConfig::default()
            .with_drag_sensitivity(1.0, 2.0)
            .with_zoom_steps(0.2, 1.0);
        assert!((config.drag_sensitivity_x - 1.0).abs() < f32::EPSILON);
        assert!((config.drag_sensitivity_y - 2.0).abs() < f32::EPSILON);
        assert!((config.zoom_step_for(true) - 1.0).abs() < f32::EPSILON);
        assert!((config.rotation_step_for(false) - 5.0).abs() < f32::EPSILON);
        assert!((config.rotation_step_for(true) - 15.0).abs() < f32::EPSILON);
    }
}
