//! World composition: stamping placed models into a shared grid.

use std::ops::Range;

use cubeworld_core::coords::truncate_offset;
use cubeworld_core::{Error, GridPos, Result};
use cubeworld_voxel::VoxelGrid;
use glam::Vec3;
use tracing::{debug, warn};

use crate::model::Model;
use crate::registry::ModelRegistry;
use crate::scene::{Placement, SceneConfig};

/// Create an all-empty cubic world of `size³` cells.
pub fn create_empty_world(size: usize) -> Result<VoxelGrid> {
    VoxelGrid::cube(size)
}

/// Number of non-empty cells in `grid`.
#[must_use]
pub fn count_non_empty_voxels(grid: &VoxelGrid) -> usize {
    grid.count_non_empty()
}

/// Stamp `source` into `world` at `offset`, scaled by `scale`.
///
/// The offset is truncated toward zero. Each destination cell inside the
/// scaled footprint samples the source cell `floor(d / scale)` (nearest
/// neighbour), so a scale of `1.0` copies the source cell for cell. Only
/// non-empty source cells are written, and they overwrite whatever the world
/// held. Destinations outside the world are clipped without error.
///
/// Returns the number of cells written.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn place_grid(
    world: &mut VoxelGrid,
    source: &VoxelGrid,
    offset: Vec3,
    scale: f32,
) -> Result<usize> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(Error::InvalidScale(format!(
            "scale must be finite and positive, got {scale}"
        )));
    }

    let offset = truncate_offset(offset);
    let src = source.dimensions();
    let dst = world.dimensions();
    let scale = f64::from(scale);
    let sample = |d: i64| (d as f64 / scale).floor() as usize;

    let mut written = 0;
    for dz in clipped_range(src.z, offset.z, dst.z, scale) {
        for dy in clipped_range(src.y, offset.y, dst.y, scale) {
            for dx in clipped_range(src.x, offset.x, dst.x, scale) {
                let Some(material) = source.get(sample(dx), sample(dy), sample(dz)) else {
                    continue;
                };
                if material.is_empty() {
                    continue;
                }
                let dest = GridPos::new(
                    (dx + offset.x) as usize,
                    (dy + offset.y) as usize,
                    (dz + offset.z) as usize,
                );
                world.set(dest, material)?;
                written += 1;
            }
        }
    }
    Ok(written)
}

/// Footprint cells `d` along one axis whose destination `d + offset` lies in
/// `[0, world_len)`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]
fn clipped_range(source_len: usize, offset: i64, world_len: usize, scale: f64) -> Range<i64> {
    let footprint = (source_len as f64 * scale).ceil() as i64;
    let start = offset.saturating_neg().max(0);
    let end = footprint.min((world_len as i64).saturating_sub(offset));
    start..end.max(start)
}

/// A placement that was left out of a composition.
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedPlacement {
    /// Position of the placement in the input list.
    pub index: usize,
    /// Why it was skipped.
    pub error: Error,
}

/// Result of composing a world.
#[derive(Clone, Debug)]
pub struct Composition {
    /// The composed grid.
    pub world: VoxelGrid,
    /// Placements that could not be applied.
    pub skipped: Vec<SkippedPlacement>,
    /// Number of cell writes performed, overlaps included.
    pub written: usize,
}

impl Composition {
    /// Returns true if every placement was applied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Merges placements of registry models into a fresh world grid.
///
/// Placements are applied in list order and later placements overwrite
/// earlier ones where they overlap. A placement naming an unknown model or
/// carrying an unusable scale is logged and skipped; the rest of the
/// composition still runs.
#[derive(Clone, Copy, Debug)]
pub struct WorldComposer<'a> {
    registry: &'a ModelRegistry,
}

impl<'a> WorldComposer<'a> {
    /// Create a composer drawing models from `registry`.
    #[must_use]
    pub const fn new(registry: &'a ModelRegistry) -> Self {
        Self { registry }
    }

    /// Compose `placements` into a new cubic world of `grid_size³` cells.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(grid_size = grid_size, placements = placements.len())
    )]
    pub fn compose(&self, placements: &[Placement], grid_size: usize) -> Result<Composition> {
        let mut world = create_empty_world(grid_size)?;
        let mut skipped = Vec::new();
        let mut written = 0;

        for (index, placement) in placements.iter().enumerate() {
            let applied = self.resolve(placement).and_then(|model| {
                place_grid(&mut world, model.data(), placement.offset, placement.scale)
            });
            match applied {
                Ok(count) => written += count,
                Err(error) if error.is_recoverable() => {
                    warn!(index, model = %placement.model, %error, "Skipping placement");
                    skipped.push(SkippedPlacement { index, error });
                }
                Err(error) => return Err(error),
            }
        }

        debug!(
            grid_size,
            placed = placements.len() - skipped.len(),
            skipped = skipped.len(),
            written,
            "Composed world"
        );

        Ok(Composition {
            world,
            skipped,
            written,
        })
    }

    /// Compose a whole scene description.
    pub fn compose_scene(&self, scene: &SceneConfig) -> Result<Composition> {
        self.compose(&scene.placements, scene.grid_size)
    }

    fn resolve(&self, placement: &Placement) -> Result<&'a Model> {
        self.registry.get(&placement.model).ok_or_else(|| {
            Error::InvalidModel(format!("no model named '{}'", placement.model))
        })
    }
}
