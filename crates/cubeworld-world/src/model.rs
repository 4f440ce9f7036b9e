//! Named voxel models.

use std::collections::BTreeMap;

use cubeworld_core::{Dimensions, Error, MaterialId, Result};
use cubeworld_voxel::VoxelGrid;
use serde::Serialize;

/// Human-readable description of each material a model uses.
pub type MaterialLegend = BTreeMap<MaterialId, String>;

/// A named, immutable voxel model.
#[derive(Clone, Debug)]
pub struct Model {
    name: String,
    size: Dimensions,
    materials: MaterialLegend,
    data: VoxelGrid,
}

impl Model {
    /// Create a model, checking that the grid matches the declared size.
    pub fn new(
        name: impl Into<String>,
        size: Dimensions,
        materials: MaterialLegend,
        data: VoxelGrid,
    ) -> Result<Self> {
        let name = name.into();
        if data.dimensions() != size {
            return Err(Error::InvalidModel(format!(
                "model '{name}' declares size {size} but its data is {}",
                data.dimensions()
            )));
        }
        Ok(Self {
            name,
            size,
            materials,
            data,
        })
    }

    /// Create a model whose declared size is taken from its grid.
    pub fn from_grid(name: impl Into<String>, materials: MaterialLegend, data: VoxelGrid) -> Self {
        Self {
            name: name.into(),
            size: data.dimensions(),
            materials,
            data,
        }
    }

    /// Model name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared size.
    #[must_use]
    pub const fn size(&self) -> Dimensions {
        self.size
    }

    /// Material legend.
    #[must_use]
    pub const fn materials(&self) -> &MaterialLegend {
        &self.materials
    }

    /// Voxel data.
    #[must_use]
    pub const fn data(&self) -> &VoxelGrid {
        &self.data
    }

    /// Number of non-empty voxels.
    #[must_use]
    pub fn voxel_count(&self) -> usize {
        self.data.count_non_empty()
    }

    /// Metadata summary.
    #[must_use]
    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            name: self.name.clone(),
            size: self.size,
            materials: self.materials.clone(),
            voxel_count: self.voxel_count(),
        }
    }
}

/// Metadata describing a [`Model`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub name: String,
    pub size: Dimensions,
    pub materials: MaterialLegend,
    pub voxel_count: usize,
}
