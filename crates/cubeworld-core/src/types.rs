//! Material types.

use std::collections::BTreeMap;
use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of the substance stored in a voxel.
///
/// Material ID 0 is reserved for empty space and is never rendered.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Pod,
    Zeroable,
    Serialize,
    Deserialize,
)]
#[repr(transparent)]
pub struct MaterialId(pub u8);

impl MaterialId {
    /// Empty space
    pub const EMPTY: Self = Self(0);
    /// Stone
    pub const STONE: Self = Self(1);
    /// Wood
    pub const WOOD: Self = Self(2);
    /// Leaves
    pub const LEAVES: Self = Self(3);
    /// Glass
    pub const GLASS: Self = Self(4);
    /// Metal
    pub const METAL: Self = Self(5);
    /// Plain red
    pub const RED: Self = Self(6);
    /// Plain green
    pub const GREEN: Self = Self(7);
    /// Plain blue
    pub const BLUE: Self = Self(8);

    /// Returns true if this cell holds nothing
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this cell holds a material
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u8> for MaterialId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

/// Display properties of a material.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// Human-readable name
    pub name: String,
    /// Base color (RGB, 0-255)
    pub color: [u8; 3],
}

impl Material {
    /// Create a material from a name and an RGB color.
    pub fn new(name: impl Into<String>, color: [u8; 3]) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Create a material from a `0xRRGGBB` color. The top byte is ignored.
    pub fn from_hex(name: impl Into<String>, hex: u32) -> Self {
        let [_, r, g, b] = hex.to_be_bytes();
        Self::new(name, [r, g, b])
    }

    /// Color with an opaque alpha channel.
    #[must_use]
    pub const fn rgba(&self) -> [u8; 4] {
        [self.color[0], self.color[1], self.color[2], 255]
    }

    /// Color formatted as `#RRGGBB`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            self.color[0], self.color[1], self.color[2]
        )
    }
}

/// Mapping from material IDs to their display properties.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    materials: BTreeMap<MaterialId, Material>,
}

impl Palette {
    /// Create an empty palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The eight standard scene materials.
    #[must_use]
    pub fn standard() -> Self {
        let entries = [
            (MaterialId::STONE, Material::from_hex("stone", 0x80_80_80)),
            (MaterialId::WOOD, Material::from_hex("wood", 0x8B_45_13)),
            (MaterialId::LEAVES, Material::from_hex("leaves", 0x22_8B_22)),
            (MaterialId::GLASS, Material::from_hex("glass", 0x87_CE_EB)),
            (MaterialId::METAL, Material::from_hex("metal", 0xC0_C0_C0)),
            (MaterialId::RED, Material::from_hex("red", 0xFF_00_00)),
            (MaterialId::GREEN, Material::from_hex("green", 0x00_FF_00)),
            (MaterialId::BLUE, Material::from_hex("blue", 0x00_00_FF)),
        ];
        Self {
            materials: entries.into_iter().collect(),
        }
    }

    /// Add or replace a material, returning the previous entry.
    ///
    /// Fails for [`MaterialId::EMPTY`], which cannot carry a material.
    pub fn insert(&mut self, id: MaterialId, material: Material) -> Result<Option<Material>> {
        if id.is_empty() {
            return Err(Error::Construction(format!(
                "material {id} is reserved for empty space"
            )));
        }
        Ok(self.materials.insert(id, material))
    }

    /// Look up a material.
    #[must_use]
    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(&id)
    }

    /// Returns true if the palette defines `id`.
    #[must_use]
    pub fn contains(&self, id: MaterialId) -> bool {
        self.materials.contains_key(&id)
    }

    /// Iterate materials in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (MaterialId, &Material)> {
        self.materials.iter().map(|(id, m)| (*id, m))
    }

    /// Number of defined materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns true if no material is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
