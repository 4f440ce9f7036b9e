//! Grid coordinates and dimensions.

use glam::{I64Vec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Axis lengths of a voxel grid. Every axis is at least one cell long.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Dimensions {
    /// Create dimensions, rejecting any zero-length axis and any size whose
    /// cell count does not fit in memory addressing.
    pub fn new(x: usize, y: usize, z: usize) -> Result<Self> {
        if x == 0 || y == 0 || z == 0 {
            return Err(Error::InvalidDimension(format!(
                "all axes must be positive, got {x}x{y}x{z}"
            )));
        }
        let volume = x.checked_mul(y).and_then(|xy| xy.checked_mul(z));
        if !volume.is_some_and(|v| isize::try_from(v).is_ok()) {
            return Err(Error::InvalidDimension(format!(
                "{x}x{y}x{z} has too many cells"
            )));
        }
        Ok(Self { x, y, z })
    }

    /// Create cubic dimensions of `size` per axis.
    pub fn cube(size: usize) -> Result<Self> {
        Self::new(size, size, size)
    }

    /// Total number of cells. Never overflows for dimensions built through
    /// [`Dimensions::new`].
    #[inline]
    #[must_use]
    pub const fn volume(self) -> usize {
        self.x * self.y * self.z
    }

    /// Returns true if every axis has the same length.
    #[inline]
    #[must_use]
    pub const fn is_cubic(self) -> bool {
        self.x == self.y && self.y == self.z
    }

    /// Returns true if `pos` lies inside these dimensions.
    #[inline]
    #[must_use]
    pub const fn contains(self, pos: GridPos) -> bool {
        pos.x < self.x && pos.y < self.y && pos.z < self.z
    }

    /// Convert a signed coordinate to a grid position if it lies inside.
    #[must_use]
    pub fn checked_pos(self, v: I64Vec3) -> Option<GridPos> {
        let x = usize::try_from(v.x).ok()?;
        let y = usize::try_from(v.y).ok()?;
        let z = usize::try_from(v.z).ok()?;
        let pos = GridPos::new(x, y, z);
        self.contains(pos).then_some(pos)
    }

    /// Linear index for flat `[z][y][x]` storage.
    #[inline]
    #[must_use]
    pub const fn index_of(self, pos: GridPos) -> usize {
        pos.x + pos.y * self.x + pos.z * self.x * self.y
    }

    /// Position of a linear index.
    #[inline]
    #[must_use]
    pub const fn pos_of(self, index: usize) -> GridPos {
        GridPos {
            x: index % self.x,
            y: (index / self.x) % self.y,
            z: index / (self.x * self.y),
        }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

/// Position of a cell inside a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl GridPos {
    /// Create a new grid position
    #[inline]
    #[must_use]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Convert to a signed vector for offset arithmetic
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn to_i64vec3(self) -> I64Vec3 {
        I64Vec3::new(self.x as i64, self.y as i64, self.z as i64)
    }

    /// Convert to floating point Vec3
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

/// Truncate a fractional offset toward zero on every axis.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn truncate_offset(offset: Vec3) -> I64Vec3 {
    I64Vec3::new(offset.x as i64, offset.y as i64, offset.z as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_axis_is_rejected() {
        assert!(matches!(
            Dimensions::new(4, 0, 4),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(Dimensions::cube(0), Err(Error::InvalidDimension(_))));
    }

    #[test]
    fn oversized_volume_is_rejected() {
        assert!(matches!(
            Dimensions::cube(1 << 22),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(
            Dimensions::new(usize::MAX, 2, 1),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(
            Dimensions::new(usize::MAX / 2 + 1, 1, 1),
            Err(Error::InvalidDimension(_))
        ));
        assert_eq!(Dimensions::cube(16).unwrap().volume(), 4096);
    }

    #[test]
    fn index_roundtrip() {
        let dims = Dimensions::new(3, 4, 5).unwrap();
        for index in 0..dims.volume() {
            assert_eq!(dims.index_of(dims.pos_of(index)), index);
        }
    }

    #[test]
    fn index_is_x_fastest() {
        let dims = Dimensions::new(3, 4, 5).unwrap();
        assert_eq!(dims.index_of(GridPos::new(1, 0, 0)), 1);
        assert_eq!(dims.index_of(GridPos::new(0, 1, 0)), 3);
        assert_eq!(dims.index_of(GridPos::new(0, 0, 1)), 12);
    }

    #[test]
    fn checked_pos_clips_outside() {
        let dims = Dimensions::cube(8).unwrap();
        assert_eq!(
            dims.checked_pos(I64Vec3::new(3, 3, 0)),
            Some(GridPos::new(3, 3, 0))
        );
        assert_eq!(dims.checked_pos(I64Vec3::new(-1, 0, 0)), None);
        assert_eq!(dims.checked_pos(I64Vec3::new(0, 8, 0)), None);
    }

    #[test]
    fn offsets_truncate_toward_zero() {
        assert_eq!(
            truncate_offset(Vec3::new(2.9, -1.7, 0.4)),
            I64Vec3::new(2, -1, 0)
        );
    }
}
