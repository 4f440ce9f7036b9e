//! Dense voxel grid storage for Cubeworld.
//!
//! - [`VoxelGrid`]: fixed-size 3D grid of material IDs, addressed `[z][y][x]`
//! - [`LayerSlice`]: borrowed 2D view of one `z` layer
//! - [`GridBuilder`]: bounds-checked range-fill authoring

pub mod builder;
pub mod grid;

pub use builder::GridBuilder;
pub use grid::{LayerSlice, VoxelGrid};
