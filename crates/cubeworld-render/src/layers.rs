//! Layered cube output.

use std::collections::BTreeSet;

use bytemuck::{Pod, Zeroable};
use cubeworld_core::{Dimensions, Palette};
use cubeworld_voxel::VoxelGrid;
use glam::Vec3;
use tracing::warn;

use crate::camera::CameraState;

/// Color used for materials the palette does not define.
pub const MISSING_MATERIAL_COLOR: [u8; 4] = [255, 0, 255, 255];

/// One cube to draw.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct CubeInstance {
    /// Cell coordinates `(x, y, z)`.
    pub grid: [u32; 3],
    /// RGBA color.
    pub color: [u8; 4],
}

impl CubeInstance {
    /// Position of the cube's corner for a given cube edge length.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn translation(&self, cube_size: f32) -> Vec3 {
        Vec3::new(
            self.grid[0] as f32,
            self.grid[1] as f32,
            self.grid[2] as f32,
        ) * cube_size
    }
}

/// The cubes of one `z` layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    pub z: usize,
    pub cubes: Vec<CubeInstance>,
}

impl Layer {
    /// Z-translation of this layer for a given cube edge length.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn translation(&self, cube_size: f32) -> f32 {
        self.z as f32 * cube_size
    }
}

/// A grid converted to drawable layers, bottom first.
///
/// Only non-empty cells produce cubes; material 0 is never emitted.
#[derive(Clone, Debug)]
pub struct LayerStack {
    dims: Dimensions,
    layers: Vec<Layer>,
}

impl LayerStack {
    /// Convert `grid` into layers, coloring cubes from `palette`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn build(grid: &VoxelGrid, palette: &Palette) -> Self {
        let mut missing = BTreeSet::new();
        let layers = grid
            .layers()
            .map(|slice| {
                let mut cubes = Vec::new();
                for (y, row) in slice.rows().enumerate() {
                    for (x, material) in row.iter().enumerate() {
                        if material.is_empty() {
                            continue;
                        }
                        let color = palette.get(*material).map_or_else(
                            || {
                                missing.insert(*material);
                                MISSING_MATERIAL_COLOR
                            },
                            |m| m.rgba(),
                        );
                        cubes.push(CubeInstance {
                            grid: [x as u32, y as u32, slice.z() as u32],
                            color,
                        });
                    }
                }
                Layer {
                    z: slice.z(),
                    cubes,
                }
            })
            .collect();

        for material in missing {
            warn!(%material, "Material missing from palette, using fallback color");
        }

        Self {
            dims: grid.dimensions(),
            layers,
        }
    }

    /// Layers from `z = 0` upward, including empty ones.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Total number of cubes across all layers.
    #[must_use]
    pub fn cube_count(&self) -> usize {
        self.layers.iter().map(|l| l.cubes.len()).sum()
    }

    /// All cubes, bottom layer first, as one flat list.
    #[must_use]
    pub fn instances(&self) -> Vec<CubeInstance> {
        self.layers
            .iter()
            .flat_map(|l| l.cubes.iter().copied())
            .collect()
    }

    /// Center of the grid in presentation units, the pivot for rotation.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pivot(&self, cube_size: f32) -> Vec3 {
        Vec3::new(self.dims.x as f32, self.dims.y as f32, self.dims.z as f32) * cube_size * 0.5
    }
}

/// Scene transform data for a GPU or DOM binding.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    /// Column-major camera transform.
    pub transform: [[f32; 4]; 4],
    /// `[cube_size, zoom, layer_count, 0]`
    pub params: [f32; 4],
}

impl SceneUniforms {
    /// Build uniforms from a camera and a layer stack.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(camera: &CameraState, stack: &LayerStack, cube_size: f32) -> Self {
        Self {
            transform: camera.transform().to_cols_array_2d(),
            params: [cube_size, camera.zoom(), stack.layers.len() as f32, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeworld_core::{GridPos, MaterialId};

    fn grid() -> VoxelGrid {
        let mut grid = VoxelGrid::with_size(3, 2, 3).unwrap();
        grid.set(GridPos::new(0, 0, 0), MaterialId::STONE).unwrap();
        grid.set(GridPos::new(2, 1, 0), MaterialId::GLASS).unwrap();
        grid.set(GridPos::new(1, 1, 2), MaterialId(99)).unwrap();
        grid
    }

    #[test]
    fn one_layer_per_z() {
        let stack = LayerStack::build(&grid(), &Palette::standard());
        assert_eq!(stack.layers().len(), 3);
        assert_eq!(stack.cube_count(), 3);
        assert!(stack.layers()[1].cubes.is_empty());
    }

    #[test]
    fn cubes_carry_position_and_color() {
        let stack = LayerStack::build(&grid(), &Palette::standard());
        let bottom = &stack.layers()[0];
        assert_eq!(
            bottom.cubes,
            vec![
                CubeInstance {
                    grid: [0, 0, 0],
                    color: [0x80, 0x80, 0x80, 255],
                },
                CubeInstance {
                    grid: [2, 1, 0],
                    color: [0x87, 0xCE, 0xEB, 255],
                },
            ]
        );
    }

    #[test]
    fn unknown_material_uses_fallback() {
        let stack = LayerStack::build(&grid(), &Palette::standard());
        let top = &stack.layers()[2];
        assert_eq!(top.cubes[0].color, MISSING_MATERIAL_COLOR);
    }

    #[test]
    fn translations_scale_with_cube_size() {
        let stack = LayerStack::build(&grid(), &Palette::standard());
        let layer = &stack.layers()[2];
        assert!((layer.translation(50.0) - 100.0).abs() < f32::EPSILON);
        assert_eq!(
            layer.cubes[0].translation(50.0),
            Vec3::new(50.0, 50.0, 100.0)
        );
        assert_eq!(stack.pivot(10.0), Vec3::new(15.0, 10.0, 15.0));
    }

    #[test]
    fn instances_cast_to_bytes() {
        let stack = LayerStack::build(&grid(), &Palette::standard());
        let instances = stack.instances();
        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), 3 * std::mem::size_of::<CubeInstance>());
        assert_eq!(std::mem::size_of::<CubeInstance>(), 16);
    }

    #[test]
    fn uniforms_from_camera() {
        let stack = LayerStack::build(&grid(), &Palette::standard());
        let uniforms = SceneUniforms::new(&CameraState::default(), &stack, 50.0);
        assert_eq!(uniforms.params, [50.0, 1.0, 3.0, 0.0]);
    }
}
