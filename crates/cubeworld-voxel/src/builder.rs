//! Declarative grid authoring.

use cubeworld_core::{Dimensions, Error, GridPos, MaterialId, Result};

use crate::grid::VoxelGrid;

/// Builder for authoring a [`VoxelGrid`] with a fluent API.
///
/// Every write is bounds-checked against the declared dimensions. The first
/// out-of-range write is remembered and reported by [`GridBuilder::build`],
/// so a mis-authored model fails at construction instead of being silently
/// truncated.
///
/// ```
/// use cubeworld_core::MaterialId;
/// use cubeworld_voxel::GridBuilder;
///
/// let grid = GridBuilder::cube(4)
///     .unwrap()
///     .fill_box([0, 0, 0], [3, 3, 0], MaterialId::STONE)
///     .set([1, 1, 1], MaterialId::WOOD)
///     .build()
///     .unwrap();
/// assert_eq!(grid.count_non_empty(), 17);
/// ```
#[derive(Debug)]
pub struct GridBuilder {
    grid: VoxelGrid,
    error: Option<Error>,
}

impl GridBuilder {
    /// Start authoring an empty grid with the given dimensions.
    #[must_use]
    pub fn new(dims: Dimensions) -> Self {
        Self {
            grid: VoxelGrid::new(dims),
            error: None,
        }
    }

    /// Start authoring an empty cubic grid.
    pub fn cube(size: usize) -> Result<Self> {
        Ok(Self::new(Dimensions::cube(size)?))
    }

    /// Set a single voxel.
    #[must_use]
    pub fn set(mut self, [x, y, z]: [usize; 3], material: MaterialId) -> Self {
        self.write(GridPos::new(x, y, z), material);
        self
    }

    /// Fill the inclusive box `min..=max` with one material.
    #[must_use]
    pub fn fill_box(self, min: [usize; 3], max: [usize; 3], material: MaterialId) -> Self {
        self.fill_with(min, max, |_| material)
    }

    /// Fill the inclusive box `min..=max`, choosing the material per cell.
    ///
    /// An inverted or out-of-bounds box is recorded as an error and nothing
    /// is written.
    #[must_use]
    pub fn fill_with(
        mut self,
        min: [usize; 3],
        max: [usize; 3],
        mut material: impl FnMut(GridPos) -> MaterialId,
    ) -> Self {
        if self.error.is_some() {
            return self;
        }
        if let Err(err) = check_box(self.grid.dimensions(), min, max) {
            self.error = Some(err);
            return self;
        }
        for z in min[2]..=max[2] {
            for y in min[1]..=max[1] {
                for x in min[0]..=max[0] {
                    let pos = GridPos::new(x, y, z);
                    let m = material(pos);
                    self.write(pos, m);
                }
            }
        }
        self
    }

    /// Fill every cell of layer `z`.
    #[must_use]
    pub fn fill_layer(self, z: usize, material: MaterialId) -> Self {
        let dims = self.grid.dimensions();
        self.fill_box([0, 0, z], [dims.x - 1, dims.y - 1, z], material)
    }

    /// Finish authoring.
    pub fn build(self) -> Result<VoxelGrid> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.grid),
        }
    }

    fn write(&mut self, pos: GridPos, material: MaterialId) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.grid.set(pos, material) {
            self.error = Some(err);
        }
    }
}

fn check_box(dims: Dimensions, min: [usize; 3], max: [usize; 3]) -> Result<()> {
    let lens = [dims.x, dims.y, dims.z];
    for (axis, name) in ['x', 'y', 'z'].into_iter().enumerate() {
        if min[axis] > max[axis] {
            return Err(Error::Construction(format!(
                "inverted fill range on {name}: {} > {}",
                min[axis], max[axis]
            )));
        }
        if max[axis] >= lens[axis] {
            return Err(Error::Construction(format!(
                "fill range {min:?}..={max:?} exceeds {dims}"
            )));
        }
    }
    Ok(())
}
