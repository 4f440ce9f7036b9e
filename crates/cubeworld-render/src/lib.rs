//! Camera state and layered scene output for Cubeworld.
//!
//! The scene is presented as a stack of 2D layers, one per grid `z`, each
//! holding unit cubes at their `(x, y)` cell. A single transform derived
//! from [`CameraState`] rotates and zooms the whole stack.
//!
//! - [`CameraState`]: tilt/spin/roll rotation and zoom with clamping
//! - [`SceneUniforms`]: GPU-ready transform built from a camera
//! - [`LayerStack`]: per-layer cube instances built from a voxel grid
//! - [`Compass`]: on-screen direction of the world axes
//! - [`preview`]: plain-text rendering of grid layers

mod camera;
mod compass;
mod layers;
pub mod preview;

pub use camera::{CameraState, MAX_TILT, MAX_ZOOM, MIN_ZOOM};
pub use compass::{AxisMarker, Compass};
pub use layers::{CubeInstance, Layer, LayerStack, SceneUniforms, MISSING_MATERIAL_COLOR};
