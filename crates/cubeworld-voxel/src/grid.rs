//! Dense voxel grid.

use cubeworld_core::{Dimensions, Error, GridPos, MaterialId, Result};

/// A fixed-size 3D grid of material IDs.
///
/// Cells are stored flat with `x` varying fastest, so the layout matches the
/// `[z][y][x]` addressing used by layered consumers: each `z` layer is a
/// contiguous run of `y` rows of `x` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    dims: Dimensions,
    cells: Vec<MaterialId>,
}

impl VoxelGrid {
    /// Create an all-empty grid with the given dimensions.
    #[must_use]
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![MaterialId::EMPTY; dims.volume()],
        }
    }

    /// Create an all-empty cubic grid of `size³` cells.
    pub fn cube(size: usize) -> Result<Self> {
        Ok(Self::new(Dimensions::cube(size)?))
    }

    /// Create an all-empty grid of `x * y * z` cells.
    pub fn with_size(x: usize, y: usize, z: usize) -> Result<Self> {
        Ok(Self::new(Dimensions::new(x, y, z)?))
    }

    /// Build a grid from nested `[z][y][x]` data.
    ///
    /// All layers must have the same number of rows and all rows the same
    /// number of cells.
    pub fn from_layers(layers: &[Vec<Vec<u8>>]) -> Result<Self> {
        let depth = layers.len();
        let height = layers.first().map_or(0, Vec::len);
        let width = layers
            .first()
            .and_then(|layer| layer.first())
            .map_or(0, Vec::len);
        let dims = Dimensions::new(width, height, depth)?;

        let mut cells = Vec::with_capacity(dims.volume());
        for (z, layer) in layers.iter().enumerate() {
            if layer.len() != height {
                return Err(Error::Construction(format!(
                    "layer {z} has {} rows, expected {height}",
                    layer.len()
                )));
            }
            for (y, row) in layer.iter().enumerate() {
                if row.len() != width {
                    return Err(Error::Construction(format!(
                        "row {y} of layer {z} has {} cells, expected {width}",
                        row.len()
                    )));
                }
                cells.extend(row.iter().copied().map(MaterialId));
            }
        }

        Ok(Self { dims, cells })
    }

    /// Grid dimensions.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Total number of cells, empty or not.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Material at `(x, y, z)`, or `None` outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<MaterialId> {
        self.get_pos(GridPos::new(x, y, z))
    }

    /// Material at `pos`, or `None` outside the grid.
    #[inline]
    #[must_use]
    pub fn get_pos(&self, pos: GridPos) -> Option<MaterialId> {
        self.dims
            .contains(pos)
            .then(|| self.cells[self.dims.index_of(pos)])
    }

    /// Write a material at `pos`, overwriting the previous value.
    pub fn set(&mut self, pos: GridPos, material: MaterialId) -> Result<()> {
        if !self.dims.contains(pos) {
            return Err(Error::Construction(format!(
                "voxel ({}, {}, {}) outside {} grid",
                pos.x, pos.y, pos.z, self.dims
            )));
        }
        let index = self.dims.index_of(pos);
        self.cells[index] = material;
        Ok(())
    }

    /// Borrow the `z` layer as a 2D `[y][x]` slice.
    #[must_use]
    pub fn layer(&self, z: usize) -> Option<LayerSlice<'_>> {
        if z >= self.dims.z {
            return None;
        }
        let stride = self.dims.x * self.dims.y;
        Some(LayerSlice {
            z,
            width: self.dims.x,
            cells: &self.cells[z * stride..(z + 1) * stride],
        })
    }

    /// Iterate all layers from bottom (`z = 0`) to top.
    pub fn layers(&self) -> impl Iterator<Item = LayerSlice<'_>> {
        let width = self.dims.x;
        self.cells
            .chunks_exact(self.dims.x * self.dims.y)
            .enumerate()
            .map(move |(z, cells)| LayerSlice { z, width, cells })
    }

    /// Iterate the position and material of every non-empty cell.
    pub fn iter_solid(&self) -> impl Iterator<Item = (GridPos, MaterialId)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_solid())
            .map(|(index, m)| (self.dims.pos_of(index), *m))
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn count_non_empty(&self) -> usize {
        self.cells.iter().filter(|m| m.is_solid()).count()
    }

    /// Returns true if every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|m| m.is_empty())
    }

    /// Raw cell bytes in `[z][y][x]` order.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }
}

/// Borrowed view of one `z` layer of a [`VoxelGrid`], indexed `[y][x]`.
#[derive(Clone, Copy, Debug)]
pub struct LayerSlice<'a> {
    z: usize,
    width: usize,
    cells: &'a [MaterialId],
}

impl<'a> LayerSlice<'a> {
    /// Height of this layer in the grid.
    #[inline]
    #[must_use]
    pub const fn z(&self) -> usize {
        self.z
    }

    /// Number of cells per row.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.cells.len() / self.width
    }

    /// Material at `(x, y)` within the layer.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<MaterialId> {
        (x < self.width && y < self.height()).then(|| self.cells[x + y * self.width])
    }

    /// Cells of row `y`.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&'a [MaterialId]> {
        (y < self.height()).then(|| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// Iterate rows from `y = 0`.
    pub fn rows(&self) -> impl Iterator<Item = &'a [MaterialId]> {
        self.cells.chunks_exact(self.width)
    }

    /// Returns true if the layer holds no material.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|m| m.is_empty())
    }
}
