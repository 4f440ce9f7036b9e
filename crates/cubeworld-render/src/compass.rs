//! Screen-space direction of the world axes.

use glam::{Quat, Vec2, Vec3};

use crate::camera::CameraState;

/// Where one world axis points after the camera rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisMarker {
    /// `'X'`, `'Y'` or `'Z'`.
    pub label: char,
    /// Projected direction on screen. Length is below 1 when the axis
    /// points toward or away from the viewer.
    pub direction: Vec2,
    /// Component toward the viewer, in `[-1, 1]`.
    pub depth: f32,
}

/// Axis indicator that follows the camera rotation, ignoring zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Compass {
    axes: [AxisMarker; 3],
}

impl Compass {
    /// Rotate the unit axes by the camera orientation.
    #[must_use]
    pub fn from_camera(camera: &CameraState) -> Self {
        let rotation = camera.rotation();
        Self {
            axes: [
                marker('X', rotation, Vec3::X),
                marker('Y', rotation, Vec3::Y),
                marker('Z', rotation, Vec3::Z),
            ],
        }
    }

    /// Markers in X, Y, Z order.
    #[must_use]
    pub const fn axes(&self) -> &[AxisMarker; 3] {
        &self.axes
    }

    /// Markers sorted back to front, for painter's-order drawing.
    #[must_use]
    pub fn back_to_front(&self) -> [AxisMarker; 3] {
        let mut axes = self.axes;
        axes.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        axes
    }
}

fn marker(label: char, rotation: Quat, axis: Vec3) -> AxisMarker {
    let v = rotation * axis;
    AxisMarker {
        label,
        direction: v.truncate(),
        depth: v.z,
    }
}
