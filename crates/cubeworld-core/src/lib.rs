//! Core types and errors for the Cubeworld voxel scene.
//!
//! This crate provides the foundational types used throughout the workspace:
//! - Material identifiers, materials and palettes
//! - Grid coordinates and dimensions
//! - The shared error type

pub mod coords;
pub mod error;
pub mod types;

pub use coords::{Dimensions, GridPos};
pub use error::{Error, Result};
pub use types::{Material, MaterialId, Palette};

/// Workspace-wide constants
pub mod constants {
    /// Default edge length of a composed world and of the built-in models.
    pub const DEFAULT_GRID_SIZE: usize = 16;
    /// Edge length of one rendered cube, in presentation units.
    pub const CUBE_SIZE: f32 = 50.0;
}
