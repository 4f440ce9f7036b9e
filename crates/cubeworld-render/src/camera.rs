//! Camera rotation and zoom.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Smallest zoom factor.
pub const MIN_ZOOM: f32 = 0.3;
/// Largest zoom factor.
pub const MAX_ZOOM: f32 = 3.0;
/// Tilt is limited to `[-MAX_TILT, MAX_TILT]` degrees.
pub const MAX_TILT: f32 = 90.0;

/// Orientation and zoom of the scene camera.
///
/// Angles are in degrees. Tilt (rotation about X) is clamped to
/// `[-90, 90]`; spin (about Z) and roll (about Y) are unbounded and only
/// wrapped when read through [`CameraState::normalized_spin`] /
/// [`CameraState::normalized_roll`]. Zoom is clamped to `[0.3, 3.0]`.
/// Non-finite deltas are ignored. Deserialized values go through
/// [`CameraState::new`], so they are clamped the same way.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCamera")]
pub struct CameraState {
    tilt: f32,
    spin: f32,
    roll: f32,
    zoom: f32,
}

/// Unchecked wire form of [`CameraState`]. Missing fields take the default.
#[derive(Deserialize)]
#[serde(default)]
struct RawCamera {
    tilt: f32,
    spin: f32,
    roll: f32,
    zoom: f32,
}

impl Default for RawCamera {
    fn default() -> Self {
        let d = CameraState::DEFAULT;
        Self {
            tilt: d.tilt,
            spin: d.spin,
            roll: d.roll,
            zoom: d.zoom,
        }
    }
}

impl From<RawCamera> for CameraState {
    fn from(raw: RawCamera) -> Self {
        Self::new(raw.tilt, raw.spin, raw.roll, raw.zoom)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CameraState {
    /// The state restored by [`CameraState::reset`].
    pub const DEFAULT: Self = Self {
        tilt: 60.0,
        spin: -45.0,
        roll: 0.0,
        zoom: 1.0,
    };

    /// Create a camera, clamping tilt and zoom into range.
    ///
    /// Non-finite components fall back to their [`CameraState::DEFAULT`]
    /// value.
    #[must_use]
    pub fn new(tilt: f32, spin: f32, roll: f32, zoom: f32) -> Self {
        let d = Self::DEFAULT;
        Self {
            tilt: finite_or(tilt, d.tilt).clamp(-MAX_TILT, MAX_TILT),
            spin: finite_or(spin, d.spin),
            roll: finite_or(roll, d.roll),
            zoom: finite_or(zoom, d.zoom).clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// Rotation about X in degrees.
    #[inline]
    #[must_use]
    pub const fn tilt(&self) -> f32 {
        self.tilt
    }

    /// Rotation about Z in degrees, unbounded.
    #[inline]
    #[must_use]
    pub const fn spin(&self) -> f32 {
        self.spin
    }

    /// Rotation about Y in degrees, unbounded.
    #[inline]
    #[must_use]
    pub const fn roll(&self) -> f32 {
        self.roll
    }

    /// Zoom factor.
    #[inline]
    #[must_use]
    pub const fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Spin wrapped into `[0, 360)`.
    #[must_use]
    pub fn normalized_spin(&self) -> f32 {
        self.spin.rem_euclid(360.0)
    }

    /// Roll wrapped into `[0, 360)`.
    #[must_use]
    pub fn normalized_roll(&self) -> f32 {
        self.roll.rem_euclid(360.0)
    }

    /// Add to the tilt, clamping to `[-90, 90]`.
    pub fn rotate_tilt(&mut self, delta: f32) {
        if delta.is_finite() {
            self.tilt = (self.tilt + delta).clamp(-MAX_TILT, MAX_TILT);
        }
    }

    /// Add to the spin.
    pub fn rotate_spin(&mut self, delta: f32) {
        if delta.is_finite() {
            self.spin += delta;
        }
    }

    /// Add to the roll.
    pub fn rotate_roll(&mut self, delta: f32) {
        if delta.is_finite() {
            self.roll += delta;
        }
    }

    /// Add to the zoom, clamping to `[0.3, 3.0]`.
    pub fn zoom_by(&mut self, delta: f32) {
        if delta.is_finite() {
            self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    /// Restore [`CameraState::DEFAULT`].
    pub fn reset(&mut self) {
        *self = Self::DEFAULT;
    }

    /// Rotation only: `rotateX(tilt) · rotateZ(spin) · rotateY(roll)`.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_x(self.tilt.to_radians())
            * Quat::from_rotation_z(self.spin.to_radians())
            * Quat::from_rotation_y(self.roll.to_radians())
    }

    /// Full scene transform: rotation followed by uniform zoom.
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        Mat4::from_quat(self.rotation()) * Mat4::from_scale(Vec3::splat(self.zoom))
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde::de::value::{Error as DeError, MapDeserializer};

    fn deserialize(fields: Vec<(&'static str, f32)>) -> CameraState {
        CameraState::deserialize(MapDeserializer::<_, DeError>::new(fields.into_iter())).unwrap()
    }

    #[test]
    fn deserialize_clamps() {
        let camera = deserialize(vec![
            ("tilt", 500.0),
            ("spin", 0.0),
            ("roll", 0.0),
            ("zoom", 50.0),
        ]);
        assert_relative_eq!(camera.tilt(), MAX_TILT);
        assert_relative_eq!(camera.zoom(), MAX_ZOOM);

        let camera = deserialize(vec![("tilt", -500.0), ("zoom", 0.0)]);
        assert_relative_eq!(camera.tilt(), -MAX_TILT);
        assert_relative_eq!(camera.zoom(), MIN_ZOOM);
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        assert_eq!(deserialize(vec![]), CameraState::DEFAULT);
        let camera = deserialize(vec![("spin", 400.0)]);
        assert_relative_eq!(camera.spin(), 400.0);
        assert_relative_eq!(camera.tilt(), 60.0);
    }

    #[test]
    fn new_rejects_non_finite() {
        let camera = CameraState::new(f32::NAN, f32::INFINITY, 10.0, f32::NAN);
        assert_eq!(camera, CameraState::new(60.0, -45.0, 10.0, 1.0));
    }

    #[test]
    fn zoom_saturates() {
        let mut camera = CameraState::default();
        for _ in 0..1000 {
            camera.zoom_by(0.1);
        }
        assert_relative_eq!(camera.zoom(), MAX_ZOOM);

        for _ in 0..1000 {
            camera.zoom_by(-0.1);
        }
        assert_relative_eq!(camera.zoom(), MIN_ZOOM);
    }

    #[test]
    fn tilt_is_clamped() {
        let mut camera = CameraState::default();
        camera.rotate_tilt(500.0);
        assert_relative_eq!(camera.tilt(), 90.0);
        camera.rotate_tilt(-1e6);
        assert_relative_eq!(camera.tilt(), -90.0);
    }

    #[test]
    fn spin_is_unbounded() {
        let mut camera = CameraState::default();
        camera.rotate_spin(765.0);
        assert_relative_eq!(camera.spin(), 720.0);
        assert_relative_eq!(camera.normalized_spin(), 0.0);

        camera.rotate_spin(-1000.0);
        assert_relative_eq!(camera.spin(), -280.0);
        assert_relative_eq!(camera.normalized_spin(), 80.0);
    }

    #[test]
    fn non_finite_deltas_are_ignored() {
        let mut camera = CameraState::default();
        camera.rotate_tilt(f32::NAN);
        camera.rotate_spin(f32::INFINITY);
        camera.zoom_by(f32::NEG_INFINITY);
        assert_eq!(camera, CameraState::DEFAULT);
    }

    #[test]
    fn reset_restores_default() {
        let mut camera = CameraState::new(-30.0, 1234.0, 77.0, 2.5);
        camera.reset();
        assert_eq!(camera, CameraState::DEFAULT);
        assert_relative_eq!(camera.tilt(), 60.0);
        assert_relative_eq!(camera.spin(), -45.0);
        assert_relative_eq!(camera.roll(), 0.0);
        assert_relative_eq!(camera.zoom(), 1.0);
    }

    #[test]
    fn new_clamps() {
        let camera = CameraState::new(120.0, 0.0, 0.0, 10.0);
        assert_relative_eq!(camera.tilt(), 90.0);
        assert_relative_eq!(camera.zoom(), 3.0);
    }

    #[test]
    fn transform_applies_zoom() {
        let camera = CameraState::new(0.0, 0.0, 0.0, 2.0);
        let p = camera.transform().transform_point3(Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 4.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 6.0, epsilon = 1e-5);
    }

    #[test]
    fn spin_rotates_about_z() {
        let camera = CameraState::new(0.0, 90.0, 0.0, 1.0);
        let p = camera.transform().transform_point3(Vec3::X);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-5);
    }
}
