//! Scene descriptions: which models go where.

use cubeworld_core::constants::DEFAULT_GRID_SIZE;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::models::{HOUSE, TREE};

const fn default_scale() -> f32 {
    1.0
}

/// A model instance positioned (and scaled) within a composed world.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Registry name of the model.
    pub model: String,
    /// Offset of the model origin in world cells. Fractional parts are
    /// truncated toward zero.
    pub offset: Vec3,
    /// Uniform scale factor; `1.0` places the model cell for cell.
    #[serde(default = "default_scale")]
    pub scale: f32,
}

impl Placement {
    /// Place `model` at `offset` with unit scale.
    pub fn new(model: impl Into<String>, offset: Vec3) -> Self {
        Self {
            model: model.into(),
            offset,
            scale: default_scale(),
        }
    }

    /// Place `model` at an integer cell offset.
    #[allow(clippy::cast_precision_loss)]
    pub fn at(model: impl Into<String>, x: i32, y: i32, z: i32) -> Self {
        Self::new(model, Vec3::new(x as f32, y as f32, z as f32))
    }

    /// Set the scale factor.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// A world size plus the ordered placements to compose into it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Edge length of the cubic world.
    pub grid_size: usize,
    /// Placements in paint order; later entries win on overlap.
    pub placements: Vec<Placement>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            placements: vec![
                Placement::at(HOUSE, 0, 0, 0),
                Placement::at(TREE, 12, 0, 0),
                Placement::at(TREE, 0, 12, 0),
            ],
        }
    }
}

impl SceneConfig {
    /// Create an empty scene of the given size.
    #[must_use]
    pub const fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            placements: Vec::new(),
        }
    }

    /// Append a placement.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placements.push(placement);
        self
    }
}
