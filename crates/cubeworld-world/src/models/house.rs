//! A small stone-floored house with wooden walls, glass windows and a
//! stepped roof.

use cubeworld_core::constants::DEFAULT_GRID_SIZE;
use cubeworld_core::{MaterialId, Result};
use cubeworld_voxel::GridBuilder;

use crate::model::{MaterialLegend, Model};

/// Name of the house model in the registry.
pub const HOUSE: &str = "house";

/// Build the house model (16x16x16).
pub fn house() -> Result<Model> {
    let grid = GridBuilder::cube(DEFAULT_GRID_SIZE)?
        // Floor
        .fill_box([4, 4, 0], [11, 11, 0], MaterialId::STONE)
        // Front wall with a 4x2 window
        .fill_with([4, 4, 1], [11, 4, 4], |p| {
            if (6..=9).contains(&p.x) && (2..=3).contains(&p.z) {
                MaterialId::GLASS
            } else {
                MaterialId::WOOD
            }
        })
        // Back wall
        .fill_box([4, 11, 1], [11, 11, 4], MaterialId::WOOD)
        // Left wall with a 2x2 window
        .fill_with([4, 5, 1], [4, 10, 4], |p| {
            if (7..=8).contains(&p.y) && (2..=3).contains(&p.z) {
                MaterialId::GLASS
            } else {
                MaterialId::WOOD
            }
        })
        // Right wall
        .fill_box([11, 5, 1], [11, 10, 4], MaterialId::WOOD)
        // Roof, one ring narrower per layer
        .fill_box([4, 4, 5], [11, 11, 5], MaterialId::WOOD)
        .fill_box([5, 5, 6], [10, 10, 6], MaterialId::WOOD)
        .fill_box([6, 6, 7], [9, 9, 7], MaterialId::WOOD)
        .fill_box([7, 7, 8], [8, 8, 8], MaterialId::WOOD)
        .build()?;

    let legend = MaterialLegend::from([
        (MaterialId::EMPTY, "empty".to_string()),
        (MaterialId::STONE, "stone (floor)".to_string()),
        (MaterialId::WOOD, "wood (walls/roof)".to_string()),
        (MaterialId::GLASS, "glass (windows)".to_string()),
    ]);

    Ok(Model::from_grid(HOUSE, legend, grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_layout() {
        let model = house().unwrap();
        let grid = model.data();

        assert_eq!(model.size().x, 16);
        // floor 64 + walls 4 * 28 + roof 64 + 36 + 16 + 4
        assert_eq!(model.voxel_count(), 296);

        assert_eq!(grid.get(4, 4, 0), Some(MaterialId::STONE));
        assert_eq!(grid.get(7, 4, 2), Some(MaterialId::GLASS));
        assert_eq!(grid.get(7, 4, 1), Some(MaterialId::WOOD));
        assert_eq!(grid.get(4, 7, 3), Some(MaterialId::GLASS));
        assert_eq!(grid.get(7, 7, 8), Some(MaterialId::WOOD));
        assert_eq!(grid.get(8, 8, 2), Some(MaterialId::EMPTY));
        assert!(grid.layer(9).unwrap().is_empty());
    }

    #[test]
    fn house_has_twelve_windows() {
        let model = house().unwrap();
        let glass = model
            .data()
            .iter_solid()
            .filter(|(_, m)| *m == MaterialId::GLASS)
            .count();
        assert_eq!(glass, 12);
    }
}
