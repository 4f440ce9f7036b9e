//! A small tree: a wooden trunk under a leaf canopy.

use cubeworld_core::{Dimensions, MaterialId, Result};
use cubeworld_voxel::GridBuilder;

use crate::model::{MaterialLegend, Model};

/// Name of the tree model in the registry.
pub const TREE: &str = "tree";

/// Build the tree model (3x3x6).
pub fn tree() -> Result<Model> {
    let size = Dimensions::new(3, 3, 6)?;
    let grid = GridBuilder::new(size)
        .fill_box([0, 0, 3], [2, 2, 4], MaterialId::LEAVES)
        .set([1, 1, 5], MaterialId::LEAVES)
        // Trunk runs up into the canopy
        .fill_box([1, 1, 0], [1, 1, 3], MaterialId::WOOD)
        .build()?;

    let legend = MaterialLegend::from([
        (MaterialId::EMPTY, "empty".to_string()),
        (MaterialId::WOOD, "wood (trunk)".to_string()),
        (MaterialId::LEAVES, "leaves".to_string()),
    ]);

    Model::new(TREE, size, legend, grid)
}
