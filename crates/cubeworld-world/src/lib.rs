//! Model registry and world composition for Cubeworld.

pub mod compose;
pub mod model;
pub mod models;
pub mod registry;
pub mod scene;

pub use compose::{
    count_non_empty_voxels, create_empty_world, place_grid, Composition, SkippedPlacement,
    WorldComposer,
};
pub use model::{MaterialLegend, Model, ModelInfo};
pub use registry::ModelRegistry;
pub use scene::{Placement, SceneConfig};
