//! Plain-text rendering of grid layers.
//!
//! Each layer is printed under a `z=N` header, rows from `y = 0`. Empty
//! cells are `.`, materials are their base-36 digit, and ids above 35
//! print as `?`.

use std::fmt::Write;

use cubeworld_core::MaterialId;
use cubeworld_voxel::VoxelGrid;

/// Character for one cell.
#[must_use]
pub fn cell_char(material: MaterialId) -> char {
    if material.is_empty() {
        '.'
    } else {
        char::from_digit(u32::from(material.0), 36).unwrap_or('?')
    }
}

/// Render every layer of `grid`, optionally skipping layers with no
/// solid cells.
#[must_use]
pub fn render_ascii(grid: &VoxelGrid, skip_empty_layers: bool) -> String {
    let mut out = String::new();
    for layer in grid.layers() {
        if skip_empty_layers && layer.is_empty() {
            continue;
        }
        let _ = writeln!(out, "z={}", layer.z());
        for row in layer.rows() {
            out.extend(row.iter().copied().map(cell_char));
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeworld_core::GridPos;

    fn sample() -> VoxelGrid {
        let mut grid = VoxelGrid::with_size(3, 2, 2).unwrap();
        grid.set(GridPos::new(0, 0, 0), MaterialId::STONE).unwrap();
        grid.set(GridPos::new(2, 1, 0), MaterialId::WOOD).unwrap();
        grid
    }

    #[test]
    fn all_layers() {
        insta::assert_snapshot!(render_ascii(&sample(), false), @r"
        z=0
        1..
        ..2
        z=1
        ...
        ...
        ");
    }

    #[test]
    fn skip_empty() {
        assert_eq!(render_ascii(&sample(), true), "z=0\n1..\n..2\n");
    }

    #[test]
    fn cell_chars() {
        assert_eq!(cell_char(MaterialId::EMPTY), '.');
        assert_eq!(cell_char(MaterialId(8)), '8');
        assert_eq!(cell_char(MaterialId(10)), 'a');
        assert_eq!(cell_char(MaterialId(200)), '?');
    }
}
