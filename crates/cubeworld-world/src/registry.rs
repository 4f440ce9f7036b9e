//! Registry of named models and the material palette they draw from.

use cubeworld_core::{Error, Palette, Result};
use hashbrown::HashMap;
use tracing::debug;

use crate::model::Model;
use crate::models;

/// Named models plus the palette used to color them.
///
/// Built once at startup and passed by reference to the composer and
/// renderer.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    palette: Palette,
    models: HashMap<String, Model>,
    /// Registration order, for stable listing.
    order: Vec<String>,
}

impl ModelRegistry {
    /// Create an empty registry using `palette`.
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            models: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a registry with the standard palette and the built-in models.
    pub fn with_builtin_models() -> Result<Self> {
        let mut registry = Self::new(Palette::standard());
        for model in models::builtin()? {
            registry.register(model)?;
        }
        Ok(registry)
    }

    /// Add a model.
    ///
    /// Fails if the name is taken or if the model uses a material the
    /// palette does not define.
    pub fn register(&mut self, model: Model) -> Result<()> {
        if self.models.contains_key(model.name()) {
            return Err(Error::DuplicateModel(model.name().to_string()));
        }
        if let Some((pos, material)) = model
            .data()
            .iter_solid()
            .find(|(_, m)| !self.palette.contains(*m))
        {
            return Err(Error::Construction(format!(
                "model '{}' uses material {material} at ({}, {}, {}) which is not in the palette",
                model.name(),
                pos.x,
                pos.y,
                pos.z
            )));
        }

        debug!(
            name = model.name(),
            size = %model.size(),
            voxels = model.voxel_count(),
            "Registered model"
        );
        self.order.push(model.name().to_string());
        self.models.insert(model.name().to_string(), model);
        Ok(())
    }

    /// Look up a model by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    /// Model names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Models in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Model> {
        self.order.iter().filter_map(|name| self.models.get(name))
    }

    /// The material palette.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of registered models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns true if no model is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
