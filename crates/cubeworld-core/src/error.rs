//! Error types for the workspace.

use thiserror::Error;

/// Workspace-wide error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A grid size or axis length of zero
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// A placement references a model that is missing or malformed
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// A placement scale that cannot be applied
    #[error("Invalid scale: {0}")]
    InvalidScale(String),

    /// Authored voxel data outside the declared model bounds or palette
    #[error("Construction error: {0}")]
    Construction(String),

    /// A model name that is already registered
    #[error("Duplicate model: {0}")]
    DuplicateModel(String),
}

impl Error {
    /// Returns `true` for errors that only skip a single placement during
    /// composition instead of aborting it.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidModel(_) | Self::InvalidScale(_))
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
